use runners::command::{Command, CommandParser, FixedTime, ParseError, parse_line};

#[test]
fn add_line_parses_every_field() {
    let cmd = parse_line("ADD 3 101 Ana Lincoln 12.34 11.00\n").unwrap();

    let Command::Add(fields) = cmd else {
        panic!("expected ADD, got {cmd:?}");
    };
    assert_eq!(fields.lane, 3);
    assert_eq!(fields.bib_number, 101);
    assert_eq!(fields.name.as_str(), "Ana");
    assert_eq!(fields.school.as_str(), "Lincoln");
    assert_eq!(fields.qualifier_time.hundredths(), 1234);
    assert_eq!(fields.record_time.hundredths(), 1100);
}

#[test]
fn remove_and_print_parse() {
    assert_eq!(
        parse_line("REMOVE 404\n").unwrap(),
        Command::Remove { bib_number: 404 }
    );
    assert_eq!(parse_line("PRINT\n").unwrap(), Command::Print);
    assert_eq!(parse_line("  PRINT  ").unwrap(), Command::Print);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(
        parse_line("print"),
        Err(ParseError::UnknownKeyword("print".to_string()))
    );
}

#[test]
fn unknown_keyword_is_reported() {
    assert_eq!(
        parse_line("FOO bar"),
        Err(ParseError::UnknownKeyword("FOO".to_string()))
    );
}

#[test]
fn blank_line_is_empty() {
    assert_eq!(parse_line(""), Err(ParseError::Empty));
    assert_eq!(parse_line(" \n"), Err(ParseError::Empty));
}

#[test]
fn field_counts_must_match_exactly() {
    assert_eq!(
        parse_line("ADD 3 101 Ana Lincoln 12.34"),
        Err(ParseError::WrongFieldCount {
            keyword: "ADD",
            expected: 6,
            got: 5
        })
    );
    assert_eq!(
        parse_line("ADD 3 101 Ana Lincoln 12.34 11.00 extra"),
        Err(ParseError::WrongFieldCount {
            keyword: "ADD",
            expected: 6,
            got: 7
        })
    );
    assert!(matches!(
        parse_line("REMOVE"),
        Err(ParseError::WrongFieldCount { keyword: "REMOVE", .. })
    ));
    assert!(matches!(
        parse_line("PRINT now"),
        Err(ParseError::WrongFieldCount { keyword: "PRINT", .. })
    ));
}

#[test]
fn names_with_spaces_shift_the_fields() {
    // Name tokens cannot contain spaces; the extra token breaks the count.
    assert!(matches!(
        parse_line("ADD 3 101 Ana Maria Lincoln 12.34 11.00"),
        Err(ParseError::WrongFieldCount { .. })
    ));
}

#[test]
fn integers_must_be_whole_tokens() {
    assert_eq!(
        parse_line("REMOVE 12x"),
        Err(ParseError::InvalidInteger {
            field: "bib",
            token: "12x".to_string()
        })
    );
    assert!(matches!(
        parse_line("ADD three 101 Ana Lincoln 12.34 11.00"),
        Err(ParseError::InvalidInteger { field: "lane", .. })
    ));
    assert_eq!(
        parse_line("REMOVE -7").unwrap(),
        Command::Remove { bib_number: -7 }
    );
}

#[test]
fn times_need_seconds_and_hundredths() {
    assert!(matches!(
        parse_line("ADD 3 101 Ana Lincoln 12 11.00"),
        Err(ParseError::InvalidFixedTime { field: "qualifier_time", .. })
    ));
    assert!(matches!(
        parse_line("ADD 3 101 Ana Lincoln 12.34 11."),
        Err(ParseError::InvalidFixedTime { field: "record_time", .. })
    ));
}

#[test]
fn fixed_time_encodes_seconds_times_one_hundred_plus_hundredths() {
    assert_eq!("10.01".parse::<FixedTime>().unwrap().hundredths(), 1001);
    assert_eq!("9.99".parse::<FixedTime>().unwrap().hundredths(), 999);
    assert_eq!(FixedTime::from_hundredths(1001).to_string(), "10.01");
    assert_eq!(FixedTime::from_hundredths(999).to_string(), "9.99");
    assert_eq!(FixedTime::from_hundredths(1100).to_string(), "11.00");
}

#[test]
fn hundredths_are_added_without_range_check() {
    let t: FixedTime = "10.150".parse().unwrap();
    assert_eq!(t.hundredths(), 1150);
    assert_eq!(t.to_string(), "11.50");

    let t: FixedTime = "10.5".parse().unwrap();
    assert_eq!(t.hundredths(), 1005);
    assert_eq!(t.to_string(), "10.05");
}

#[test]
fn fixed_time_overflow_is_rejected() {
    assert!("2147483647.00".parse::<FixedTime>().is_err());
    assert!(FixedTime::from_parts(i32::MAX, 0).is_none());
    assert_eq!(
        FixedTime::from_parts(21_474_836, 47).map(FixedTime::hundredths),
        Some(i32::MAX)
    );
    assert!(FixedTime::from_parts(21_474_836, 48).is_none());
}

#[test]
fn over_long_text_is_rejected_not_truncated() {
    let parser = CommandParser::new(5);
    assert_eq!(
        parser.parse("ADD 1 2 Alexandra Lincoln 1.00 1.00"),
        Err(ParseError::TextTooLong {
            field: "name",
            len: 9,
            max: 5
        })
    );
    assert!(matches!(
        parser.parse("ADD 1 2 Ana Lincoln 1.00 1.00"),
        Err(ParseError::TextTooLong { field: "school", .. })
    ));
    assert!(parser.parse("ADD 1 2 Ana Linc 1.00 1.00").is_ok());
}

#[test]
fn non_utf8_bytes_are_malformed() {
    let parser = CommandParser::default();
    assert_eq!(
        parser.parse_bytes(b"ADD 1 2 \xff\xfe x 1.00 1.00"),
        Err(ParseError::NotUtf8)
    );
}
