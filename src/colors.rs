#[macro_export]
macro_rules! eshow {
    ($($expression:expr),* $(,)?) => {
        $( ::std::eprint!("{}", $expression); )*
    };
}

#[macro_export]
macro_rules! eshowln {
    ($($expression:expr),* $(,)?) => {
        $crate::eshow!($($expression),*);
        ::std::eprintln!();
    };
}
