use barcode::gs1::GS1Message;
use barcode::ParseConfig;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn config() -> ParseConfig {
    ParseConfig {
        reference_year: Some(2026),
        ..ParseConfig::default()
    }
}

#[test]
fn test_parse_message_with_mixed_fixed_and_variable_elements() {
    let message = GS1Message::parse(
        "010590123412345710ABC123\u{1d}15210526",
        &config(),
    )
    .unwrap();
    assert_eq!(message.element_strings.len(), 3);
    assert_eq!(
        message.get_by_ai("01").unwrap().gtin.as_ref().unwrap().value,
        "05901234123457"
    );
    assert_eq!(message.get_by_ai("10").unwrap().value, "ABC123");
    assert_eq!(
        message.get_by_ai("15").unwrap().date,
        Some(NaiveDate::from_ymd_opt(2021, 5, 26).unwrap())
    );
}

#[test]
fn test_trailing_variable_element_without_separator_consumes_to_end() {
    let message = GS1Message::parse("0105901234123457211234-5678", &config()).unwrap();
    assert_eq!(message.get_by_ai("21").unwrap().value, "1234-5678");
}

#[test]
fn test_separator_after_fixed_length_element_fails() {
    let error = GS1Message::parse("0105901234123457\u{1d}15210526", &config()).unwrap_err();
    assert!(error.to_string().contains("fixed length"), "{}", error);
}

#[test]
fn test_hri_round_trip() {
    let hri = "(01)05901234123457(3103)000195";
    let message = GS1Message::parse_hri(hri, &config()).unwrap();

    let element = message.get_by_ai("01").unwrap();
    assert_eq!(element.gtin.as_ref().unwrap().value, "05901234123457");
    let element = message.get_by_ai("3103").unwrap();
    assert_eq!(element.decimal, Some(Decimal::new(195, 3)));

    assert_eq!(message.as_hri(), hri);
    let reparsed = GS1Message::parse_hri(&message.as_hri(), &config()).unwrap();
    assert_eq!(reparsed.element_strings, message.element_strings);
}

#[test]
fn test_hri_with_variable_length_elements_round_trips() {
    let hri = "(10)ABC123(17)221231";
    let message = GS1Message::parse_hri(hri, &config()).unwrap();
    assert_eq!(message.element_strings.len(), 2);
    assert_eq!(message.as_hri(), hri);
}

#[test]
fn test_message_reconstructs_its_input() {
    // Concatenating AI + value + separator (for FNC1-requiring AIs that are
    // followed by more data) reproduces the message.
    let input = "10ABC123\u{1d}0105901234123457";
    let message = GS1Message::parse(input, &config()).unwrap();
    let mut reconstructed = String::new();
    for (index, element) in message.element_strings.iter().enumerate() {
        reconstructed.push_str(element.ai.ai);
        reconstructed.push_str(&element.value);
        if element.ai.fnc1_required && index < message.element_strings.len() - 1 {
            reconstructed.push('\u{1d}');
        }
    }
    assert_eq!(reconstructed, input);
}

#[test]
fn test_custom_separator_chars() {
    let config = ParseConfig {
        separator_chars: vec!['|'],
        ..config()
    };
    let message = GS1Message::parse("10ABC123|15210526", &config).unwrap();
    assert_eq!(message.element_strings.len(), 2);
    assert_eq!(message.get_by_ai("10").unwrap().value, "ABC123");
}

#[test]
fn test_embedded_gtin_with_bad_check_digit_fails_the_message() {
    let error = GS1Message::parse("0105901234123450", &config()).unwrap_err();
    assert!(error.is_checksum());
}

#[test]
fn test_filter_by_ai_family_prefix() {
    let message =
        GS1Message::parse_hri("(3103)000195(3302)000125(10)A1", &config()).unwrap();
    assert_eq!(message.filter_by_ai("31").len(), 1);
    assert_eq!(message.filter_by_ai("33").len(), 1);
    assert_eq!(message.filter_by_ai("3").len(), 2);
    assert_eq!(message.filter_by_data_title("WEIGHT").len(), 2);
}
