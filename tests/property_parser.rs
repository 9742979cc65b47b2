use proptest::prelude::*;
use runners::command::{Command, FixedTime, parse_line};

proptest! {
    // Any in-range seconds/hundredths pair renders back to the same text.
    #[test]
    fn fixed_time_renders_what_was_written(seconds in 0i32..100_000, hundredths in 0i32..100) {
        let text = format!("{seconds}.{hundredths:02}");
        let time: FixedTime = text.parse().unwrap();
        prop_assert_eq!(time.hundredths(), seconds * 100 + hundredths);
        prop_assert_eq!(time.to_string(), text);
    }

    #[test]
    fn add_lines_round_trip_to_fields(
        lane in -50i32..50,
        bib in any::<i32>(),
        name in "[A-Za-z]{1,20}",
        school in "[A-Za-z]{1,20}",
        q in 0i32..1_000_000,
        r in 0i32..1_000_000,
    ) {
        let line = format!(
            "ADD {lane} {bib} {name} {school} {}.{:02} {}.{:02}\n",
            q / 100, q % 100, r / 100, r % 100
        );
        let Ok(Command::Add(fields)) = parse_line(&line) else {
            return Err(TestCaseError::fail(format!("did not parse: {line}")));
        };
        prop_assert_eq!(fields.lane, lane);
        prop_assert_eq!(fields.bib_number, bib);
        prop_assert_eq!(fields.name.as_str(), name.as_str());
        prop_assert_eq!(fields.school.as_str(), school.as_str());
        prop_assert_eq!(fields.qualifier_time.hundredths(), q);
        prop_assert_eq!(fields.record_time.hundredths(), r);
    }

    // The parser never panics, whatever arrives on the channel.
    #[test]
    fn arbitrary_lines_never_panic(line in "\\PC{0,99}") {
        let _ = parse_line(&line);
    }
}
