use barcode::checksum;
use barcode::gtin::Gtin;
use barcode::upc::Upc;
use barcode::{parse, ParseConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_does_not_crash(value in "\\PC*") {
        let _ = parse(&value, &ParseConfig::default());
    }

    #[test]
    fn valid_gtin_13_always_parses_and_check_digit_recomputes(payload in "[0-9]{12}") {
        let check_digit = checksum::compute(&payload).unwrap();
        let value = format!("{}{}", payload, check_digit);

        let gtin = Gtin::parse(&value, None).unwrap();
        prop_assert_eq!(gtin.check_digit, check_digit);
        prop_assert_eq!(checksum::compute(&gtin.payload).unwrap(), gtin.check_digit);
        prop_assert!(checksum::verify(&value).is_ok());
    }

    #[test]
    fn corrupting_the_check_digit_is_always_detected(payload in "[0-9]{12}", offset in 1u8..=9) {
        let check_digit = checksum::compute(&payload).unwrap();
        let corrupted = (check_digit + offset) % 10;
        let value = format!("{}{}", payload, corrupted);
        prop_assert!(Gtin::parse(&value, None).unwrap_err().is_checksum());
    }

    #[test]
    fn upc_e_round_trips_through_upc_a(body in "[0-9]{6}") {
        let upc_e = Upc::parse(&body).unwrap();
        let upc_a = Upc::parse(&upc_e.as_upc_a()).unwrap();
        prop_assert_eq!(upc_a.check_digit, upc_e.check_digit);

        // Compressing the expansion and expanding again is stable.
        let compressed = upc_a.as_upc_e().unwrap();
        let reparsed = Upc::parse(&compressed).unwrap();
        prop_assert_eq!(reparsed.as_upc_a(), upc_e.as_upc_a());
    }
}
