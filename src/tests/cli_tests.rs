use crate::{parse_unix_wildcard, render, Dialect, Error, Options, Pattern, ANY_CHAR};

fn options(args: &[&str]) -> crate::Result<Options> {
    Options::parse(args.iter().map(|arg| arg.to_string()))
}

#[test]
fn test_default_options() {
    assert_eq!(
        options(&["a*"]).unwrap(),
        Options {
            dialect: Dialect::UnixWildcard,
            escape: Some('\\'),
            render: None,
            pattern: "a*".to_string(),
        }
    );
}

#[test]
fn test_all_options() {
    assert_eq!(
        options(&["-s", "--escape", "!", "-t", "regex", "a!%%"]).unwrap(),
        Options {
            dialect: Dialect::Sql92,
            escape: Some('!'),
            render: Some(Dialect::Regex),
            pattern: "a!%%".to_string(),
        }
    );
    assert_eq!(options(&["--no-escape", "x"]).unwrap().escape, None);
}

#[test]
fn test_invalid_options() {
    assert!(matches!(options(&[]), Err(Error::Usage(_))));
    assert!(matches!(options(&["-e", "ab", "x"]), Err(Error::Usage(_))));
    assert!(matches!(options(&["-e"]), Err(Error::Usage(_))));
    assert!(matches!(options(&["--to", "glob", "x"]), Err(Error::Usage(_))));
    assert!(matches!(options(&["x", "y"]), Err(Error::Usage(_))));
}

#[test]
fn test_dialect_from_str() {
    assert_eq!("unix".parse::<Dialect>().unwrap(), Dialect::UnixWildcard);
    assert_eq!("sql92".parse::<Dialect>().unwrap(), Dialect::Sql92);
    assert_eq!("regex".parse::<Dialect>().unwrap(), Dialect::Regex);
    assert_eq!("simple".parse::<Dialect>().unwrap(), Dialect::Simple);
}

#[test]
fn test_parse_pattern_by_dialect() {
    let unix = options(&["a?"]).unwrap().parse_pattern().unwrap();
    assert_eq!(unix, Pattern::of("a").then(ANY_CHAR));

    let sql92 = options(&["-s", "a_"]).unwrap().parse_pattern().unwrap();
    assert_eq!(sql92, unix);
}

#[test]
fn test_render_dialects() {
    let pattern = parse_unix_wildcard("a%[bc]*");
    assert_eq!(render(&pattern, Dialect::UnixWildcard, Some('\\')).unwrap(), "a%[bc]*");
    assert_eq!(render(&pattern, Dialect::Sql92, Some('\\')).unwrap(), "a\\%_%");
    assert_eq!(render(&pattern, Dialect::Regex, None).unwrap(), "^(a%[bc].*)$");
    assert!(matches!(
        render(&pattern, Dialect::Simple, None),
        Err(Error::UnsupportedConstruct(_))
    ));
    assert_eq!(render(&Pattern::of("a/b"), Dialect::Simple, Some('/')).unwrap(), "a//b");
}

#[test]
fn test_render_without_escape_needs_escaping_dialect() {
    let pattern = Pattern::of("a*b");
    for dialect in [Dialect::UnixWildcard, Dialect::Sql92] {
        assert!(matches!(render(&pattern, dialect, None), Err(Error::Usage(_))));
    }
    assert_eq!(render(&pattern, Dialect::Simple, None).unwrap(), "a*b");
    assert_eq!(render(&pattern, Dialect::Regex, None).unwrap(), "^a\\*b$");
}
