/// Unwraps a `Result` inside a function returning `Option<Result<T, E>>`.
///
/// `Ok(value)` evaluates to `value`; `Err(err)` returns `Some(Err(err))` from the
/// enclosing function. Meant for `Iterator::next` implementations whose items are
/// results, where a failed view access has to be surfaced as the next item.
#[macro_export]
macro_rules! try_or_ret_some_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => return Some(Err(err.into())),
        }
    };
}
