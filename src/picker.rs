use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};

use fs_err as fs;
use owo_colors::{OwoColorize, Stream::Stdout};
use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use serde_json::{ser::Formatter, Serializer, Value};

use crate::error::PickerError;

pub const USERS_FILE_NAME: &str = "users.json";

const LABEL: &str = "Random User:";

/// A single user, kept as whatever JSON value the file holds.
pub type UserRecord = Value;
pub type UserList = Vec<UserRecord>;

type Result<T> = std::result::Result<T, PickerError>;

/// Path of the users file that sits next to the running executable.
pub fn resolve_path() -> Result<PathBuf> {
    let executable = env::current_exe().map_err(PickerError::ResolvePath)?;
    users_file_next_to(&executable)
}

fn users_file_next_to(executable: &Path) -> Result<PathBuf> {
    let directory = executable
        .parent()
        .ok_or_else(|| PickerError::NoParentDirectory(executable.to_path_buf()))?;

    if directory.is_absolute() {
        Ok(users_file_in(directory))
    } else {
        let cwd = env::current_dir().map_err(PickerError::ResolvePath)?;
        Ok(users_file_in(&cwd.join(directory)))
    }
}

pub fn users_file_in(directory: &Path) -> PathBuf {
    directory.join(USERS_FILE_NAME)
}

/// Read `path` and parse it as a JSON array of users.
///
/// Elements are not inspected, any JSON value is a valid user.
pub fn load_users(path: &Path) -> Result<UserList> {
    let contents = fs::read(path).map_err(PickerError::FileNotFound)?;

    let document = serde_json::from_slice::<Value>(&contents).map_err(|source| PickerError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match document {
        Value::Array(users) => Ok(users),
        other => Err(PickerError::NotASequence {
            path: path.to_path_buf(),
            found: json_kind(&other),
        }),
    }
}

pub fn pick_random<'a, R>(users: &'a [UserRecord], rng: &mut R) -> Result<&'a UserRecord>
where
    R: Rng + ?Sized,
{
    users.choose(rng).ok_or(PickerError::EmptyCollection)
}

/// Write `Random User: <record>` as a single line.
pub fn display(record: &UserRecord, out: &mut impl Write) -> Result<()> {
    write!(out, "{} ", LABEL.if_supports_color(Stdout, |text| text.green())).map_err(PickerError::Output)?;
    write_record(record, &mut *out).map_err(|err| PickerError::Output(err.into()))?;
    writeln!(out).map_err(PickerError::Output)?;
    out.flush().map_err(PickerError::Output)
}

fn write_record(record: &UserRecord, out: impl Write) -> serde_json::Result<()> {
    let mut serializer = Serializer::with_formatter(out, SpacedFormatter);
    record.serialize(&mut serializer)
}

/// Compact JSON, but with a space after every `:` and `,`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
