//! Class-name combination helper

/// Join class lists, skipping empty entries and collapsing whitespace.
///
/// Each entry may itself contain several space separated classes.
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Entry that is only present when `enabled` is true.
pub fn when(enabled: bool, classes: &str) -> &str {
    if enabled { classes } else { "" }
}

/// `class_names` over a literal list, e.g.
/// `cn!["base", when(open, "is-open")]`.
#[macro_export]
macro_rules! cn {
    ($($part:expr),* $(,)?) => {
        $crate::core::class_names([$($part),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_single_spaces() {
        assert_eq!(class_names(["a", "b c", "d"]), "a b c d");
    }

    #[test]
    fn test_drops_empty_and_whitespace_entries() {
        assert_eq!(class_names(["", "a", "   ", "b"]), "a b");
        assert_eq!(class_names(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_collapses_inner_whitespace() {
        assert_eq!(class_names(["  w-16   h-16 ", "\nrounded-full"]), "w-16 h-16 rounded-full");
    }

    #[test]
    fn test_when() {
        assert_eq!(class_names(["base", when(true, "on"), when(false, "off")]), "base on");
    }

    #[test]
    fn test_cn_macro() {
        let open = false;
        assert_eq!(crate::cn!["menu", when(open, "menu-open"), "md:hidden"], "menu md:hidden");
    }
}
