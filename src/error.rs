use std::{io, path::PathBuf};

use owo_colors::{OwoColorize, Stream::Stderr};

#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("could not locate the running executable: {0}")]
    ResolvePath(#[source] io::Error),
    #[error("executable path `{}` has no parent directory", .0.display())]
    NoParentDirectory(PathBuf),
    #[error("could not read the users file: {0}")]
    FileNotFound(#[source] io::Error),
    #[error("users file `{}` is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("users file `{}` holds {found}, expected a list of users", path.display())]
    NotASequence { path: PathBuf, found: &'static str },
    #[error("the list of users is empty, there is nobody to pick")]
    EmptyCollection,
    #[error("could not write to STDOUT: {0}")]
    Output(#[source] io::Error),
}

impl PickerError {
    /// Name of the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::ResolvePath(_) | Self::NoParentDirectory(_) => "resolve",
            Self::FileNotFound(_) => "load",
            Self::Parse { .. } | Self::NotASequence { .. } => "parse",
            Self::EmptyCollection => "pick",
            Self::Output(_) => "display",
        }
    }
}

pub trait UnwrapOrExplode<T> {
    fn unwrap_or_explode(self) -> T;
}

impl<T> UnwrapOrExplode<T> for Result<T, PickerError> {
    fn unwrap_or_explode(self) -> T {
        match self {
            Ok(inner) => inner,
            Err(err) => explode_error(&err),
        }
    }
}

fn explode_error(err: &PickerError) -> ! {
    log::debug!("aborting at the {} stage: {err:?}", err.stage());
    crate::eshowln!(
        "Error".if_supports_color(Stderr, |text| text.red()),
        ": ",
        format_args!("[{}] {err}", err.stage()),
    );
    std::process::exit(1)
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::PickerError;

    #[test]
    fn every_variant_names_its_stage() {
        let io_error = || io::Error::new(io::ErrorKind::NotFound, "gone");
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        let cases = [
            (PickerError::ResolvePath(io_error()), "resolve"),
            (PickerError::NoParentDirectory(PathBuf::from("/")), "resolve"),
            (PickerError::FileNotFound(io_error()), "load"),
            (
                PickerError::Parse {
                    path: PathBuf::from("users.json"),
                    source: json_error,
                },
                "parse",
            ),
            (
                PickerError::NotASequence {
                    path: PathBuf::from("users.json"),
                    found: "an object",
                },
                "parse",
            ),
            (PickerError::EmptyCollection, "pick"),
            (PickerError::Output(io_error()), "display"),
        ];

        for (err, stage) in cases {
            assert_eq!(err.stage(), stage, "{err}");
        }
    }

    #[test]
    fn messages_mention_the_users_file() {
        let err = PickerError::NotASequence {
            path: PathBuf::from("/opt/app/users.json"),
            found: "a string",
        };

        assert_eq!(
            err.to_string(),
            "users file `/opt/app/users.json` holds a string, expected a list of users",
        );
    }
}
