/// Copies every `Some` field of `$newer` onto `$target`, leaving fields the
/// newer observation did not carry untouched.
macro_rules! merge_fields {
    ($target:ident, $newer:ident; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$newer.$field {
                $target.$field = Some(value.clone());
            }
        )+
    };
}
