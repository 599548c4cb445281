#[cfg(test)]
mod tests {
    use crate::indent::{
        IndentUnit, default_indent_unit, format_query, indent, set_default_indent_unit,
        set_default_indent_unit_scoped,
    };
    use pretty_assertions::assert_eq;
    use std::borrow::Cow;

    #[test]
    fn indent_unit_display() {
        let cases = vec![
            (IndentUnit::Tab, "tab"),
            (IndentUnit::TwoSpaces, "two spaces"),
            (IndentUnit::FourSpaces, "four spaces"),
        ];

        for (unit, expected) in cases {
            assert_eq!(unit.to_string(), expected);
        }
    }

    #[test]
    fn repeat_levels() {
        assert_eq!(IndentUnit::Tab.repeat(0), "");
        assert_eq!(IndentUnit::Tab.repeat(3), "\t\t\t");
        assert_eq!(IndentUnit::TwoSpaces.repeat(2), "    ");
        assert_eq!(IndentUnit::FourSpaces.repeat(1), "    ");
    }

    #[test]
    fn cached_and_computed_levels() {
        assert!(matches!(IndentUnit::Tab.repeat(16), Cow::Borrowed(_)));

        let deep = IndentUnit::TwoSpaces.repeat(40);
        assert!(matches!(deep, Cow::Owned(_)));
        assert_eq!(deep.len(), 80);
        assert_eq!(IndentUnit::Tab.repeat(17), "\t".repeat(17));
    }

    #[test]
    fn scoped_default_applies() {
        {
            let _guard = set_default_indent_unit_scoped(IndentUnit::Tab);
            assert_eq!(default_indent_unit(), IndentUnit::Tab);
            assert_eq!(set_default_indent_unit(IndentUnit::FourSpaces), IndentUnit::Tab);
            assert_eq!(indent(1), "    ");
        }

        {
            let _guard = set_default_indent_unit_scoped(IndentUnit::TwoSpaces);
            assert_eq!(default_indent_unit(), IndentUnit::TwoSpaces);
            assert_eq!(indent(2), "    ");
        }

        let _guard = set_default_indent_unit_scoped(IndentUnit::FourSpaces);
        assert_eq!(indent(1), "    ");
    }

    #[test]
    fn format_query_prefixes() {
        let _guard = set_default_indent_unit_scoped(IndentUnit::Tab);
        assert_eq!(format_query("SHOW ROLES", 0), "SHOW ROLES");
        assert_eq!(format_query("SHOW ROLES", 2), "\t\tSHOW ROLES");
        assert_eq!(format_query("", 1), "\t");
    }
}
