#[cfg(test)]
mod tests {
    use crate::indent::{IndentUnit, set_default_indent_unit_scoped};
    use crate::listers::*;
    use crate::objects::{IntegrationKind, ObjectKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn show_grants_plain() {
        assert_eq!(show_grants(0).unwrap(), "SHOW GRANTS");
        assert_eq!(show_grants_on_account(0).unwrap(), "SHOW GRANTS ON ACCOUNT");
    }

    #[test]
    fn show_grants_on_objects() {
        assert_eq!(
            show_grants_on(ObjectKind::Table, "db.sch.orders", 0).unwrap(),
            r#"SHOW GRANTS ON TABLE "DB"."SCH"."ORDERS""#
        );
        assert_eq!(
            show_grants_on(ObjectKind::FileFormat, r#"sch."My Format""#, 0).unwrap(),
            r#"SHOW GRANTS ON FILE FORMAT "SCH"."My Format""#
        );
        assert_eq!(
            show_grants_on(ObjectKind::Database, "", 0).unwrap(),
            "SHOW GRANTS ON DATABASE"
        );
    }

    #[test]
    fn show_grants_to_targets() {
        let cases = vec![
            (
                GrantsTo {
                    application_role: Some("admin".into()),
                    application: Some("app".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO APPLICATION ROLE "APP"."ADMIN""#,
            ),
            (
                GrantsTo {
                    application_role: Some("admin".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO APPLICATION ROLE "ADMIN""#,
            ),
            (
                GrantsTo {
                    application: Some("app".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO APPLICATION "APP""#,
            ),
            (
                GrantsTo {
                    role: Some("analyst".into()),
                    user: Some("bob".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO ROLE "ANALYST""#,
            ),
            (
                GrantsTo {
                    share: Some("s1".into()),
                    in_application_package: Some("pkg".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO SHARE "S1" IN APPLICATION PACKAGE "PKG""#,
            ),
            (
                GrantsTo {
                    share: Some("s1".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO SHARE "S1""#,
            ),
            (
                GrantsTo {
                    user: Some("bob".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO USER "BOB""#,
            ),
            (
                GrantsTo {
                    application_role: Some(String::new()),
                    role: Some("r".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO ROLE "R""#,
            ),
            (
                GrantsTo {
                    share: Some(String::new()),
                    user: Some("u".into()),
                    ..Default::default()
                },
                r#"SHOW GRANTS TO USER "U""#,
            ),
        ];

        for (target, expected) in cases {
            assert_eq!(show_grants_to(&target, 0).unwrap().as_deref(), Some(expected));
        }
    }

    #[test]
    fn show_grants_to_without_target() {
        assert_eq!(show_grants_to(&GrantsTo::default(), 0).unwrap(), None);

        let package_only = GrantsTo {
            in_application_package: Some("pkg".into()),
            role: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(show_grants_to(&package_only, 0).unwrap(), None);
    }

    #[test]
    fn show_grants_of() {
        assert_eq!(
            show_grants_of_application_role("admin", Some("app"), 0).unwrap(),
            r#"SHOW GRANTS OF APPLICATION ROLE "APP"."ADMIN""#
        );
        assert_eq!(
            show_grants_of_application_role("admin", None, 0).unwrap(),
            r#"SHOW GRANTS OF APPLICATION ROLE "ADMIN""#
        );
        assert_eq!(show_grants_of_role("analyst", 0).unwrap(), r#"SHOW GRANTS OF ROLE "ANALYST""#);
        assert_eq!(show_grants_of_share("s1", 0).unwrap(), r#"SHOW GRANTS OF SHARE "S1""#);
    }

    #[test]
    fn show_future_grants() {
        assert_eq!(
            show_future_grants_in_schema("db.sch", 0).unwrap(),
            r#"SHOW FUTURE GRANTS IN SCHEMA "DB"."SCH""#
        );
        assert_eq!(
            show_future_grants_in_database("db", 0).unwrap(),
            r#"SHOW FUTURE GRANTS IN DATABASE "DB""#
        );
        assert_eq!(
            show_future_grants_to_role("analyst", 0).unwrap(),
            r#"SHOW FUTURE GRANTS TO ROLE "ANALYST""#
        );
    }

    #[test]
    fn show_integrations_kinds() {
        assert_eq!(show_integrations(IntegrationKind::All, None, 0).unwrap(), "SHOW INTEGRATIONS");
        assert_eq!(
            show_integrations(IntegrationKind::Storage, Some("s3_%"), 0).unwrap(),
            "SHOW STORAGE INTEGRATIONS LIKE 's3_%'"
        );
        assert_eq!(
            show_integrations(IntegrationKind::Api, Some("it's"), 0).unwrap(),
            r"SHOW API INTEGRATIONS LIKE 'it\'s'"
        );
    }

    #[test]
    fn show_roles_like() {
        assert_eq!(show_roles(None, 0).unwrap(), "SHOW ROLES");
        assert_eq!(show_roles(Some("dev%"), 0).unwrap(), "SHOW ROLES LIKE 'dev%'");
    }

    #[test]
    fn show_users_options() {
        assert_eq!(ShowUsers::default().build(0).unwrap(), "SHOW USERS");

        let opts = ShowUsers {
            terse: true,
            like: Some("a%".into()),
            starts_with: Some("Al".into()),
            limit: Some(10),
            from: Some("alice".into()),
        };
        assert_eq!(
            opts.build(0).unwrap(),
            "SHOW TERSE USERS LIKE 'a%' STARTS WITH 'Al' LIMIT 10 FROM 'alice'"
        );

        // 0 与缺省一样被省略。
        let zero = ShowUsers {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.build(0).unwrap(), "SHOW USERS");
    }

    #[test]
    fn listers_indent() {
        let _guard = set_default_indent_unit_scoped(IndentUnit::TwoSpaces);
        assert_eq!(show_roles(None, 1).unwrap(), "  SHOW ROLES");
        assert_eq!(
            show_grants_to(
                &GrantsTo {
                    role: Some("r".into()),
                    ..Default::default()
                },
                2
            )
            .unwrap()
            .as_deref(),
            Some(r#"    SHOW GRANTS TO ROLE "R""#)
        );
    }

    #[test]
    fn object_kind_keywords() {
        assert_eq!(ObjectKind::EventTable.to_string(), "EVENT TABLE");
        assert_eq!(IntegrationKind::default().as_str(), "");
    }
}
