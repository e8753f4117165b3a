//! GS1 Application Identifier catalog
//!
//! Data from the GS1 General Specifications, Figure 3.2-1. Each entry
//! carries the format of its value as a `+`-separated list of segments; the
//! first segment describes the AI itself and the rest describe the value.
//! Segment syntax: `N` digits, `X` CSET 82 characters, `Y` any printable
//! ASCII; a fixed width (`N6`), a bounded width (`N..15`), or a bounded
//! range (`N6..12`).

/// One entry of the Application Identifier catalog.
#[derive(Debug, Eq, PartialEq)]
pub struct ApplicationIdentifier {
    /// The AI digits, 2-4 characters, e.g. `"01"` or `"3103"`.
    pub ai: &'static str,
    /// Human description of the field.
    pub description: &'static str,
    /// Short data title printed next to the value in HRI text.
    pub data_title: &'static str,
    /// Format of AI and value, e.g. `"N2+N14"` or `"N2+X..20"`.
    pub format: &'static str,
    /// Whether the value is variable length and must be terminated by FNC1
    /// when it does not end the message.
    pub fnc1_required: bool,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum CharClass {
    /// ASCII decimal digits.
    Digit,
    /// GS1 CSET 82, the invariant character set.
    Cset82,
    /// Any printable ASCII character.
    Printable,
}

impl CharClass {
    pub(crate) fn contains(self, ch: char) -> bool {
        match self {
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::Cset82 => {
                ch.is_ascii_alphanumeric()
                    || matches!(
                        ch,
                        '!' | '"'
                            | '%'
                            | '&'
                            | '\''
                            | '('
                            | ')'
                            | '*'
                            | '+'
                            | ','
                            | '-'
                            | '.'
                            | '/'
                            | ':'
                            | ';'
                            | '<'
                            | '='
                            | '>'
                            | '?'
                            | '_'
                    )
            }
            CharClass::Printable => ch.is_ascii_graphic(),
        }
    }
}

/// One segment of an AI value format.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) struct Segment {
    pub class: CharClass,
    pub min: usize,
    pub max: usize,
}

impl Segment {
    pub(crate) fn is_variable(&self) -> bool {
        self.min != self.max
    }
}

impl ApplicationIdentifier {
    /// Look up a catalog entry by its exact AI string.
    pub fn lookup(ai: &str) -> Option<&'static ApplicationIdentifier> {
        AI_TABLE.iter().find(|entry| entry.ai == ai)
    }

    /// Find the longest catalog AI that is a prefix of `buffer`.
    ///
    /// AIs are 2-4 digits, so candidates are tried longest first.
    pub fn extract_prefix(buffer: &str) -> Option<&'static ApplicationIdentifier> {
        for len in (2..=4).rev() {
            if buffer.len() >= len && buffer.is_char_boundary(len) {
                if let Some(entry) = Self::lookup(&buffer[..len]) {
                    return Some(entry);
                }
            }
        }
        None
    }

    /// The parsed segments of the value part of `format` (the leading AI
    /// segment is skipped).
    ///
    /// Catalog formats are well formed by construction; a malformed one is
    /// a programming error in the table, reported via debug assertion and
    /// otherwise skipped.
    pub(crate) fn value_segments(&self) -> Vec<Segment> {
        self.format
            .split('+')
            .skip(1)
            .filter_map(parse_segment)
            .collect()
    }
}

fn parse_segment(token: &str) -> Option<Segment> {
    let mut chars = token.chars();
    let class = match chars.next() {
        Some('N') => CharClass::Digit,
        Some('X') => CharClass::Cset82,
        Some('Y') => CharClass::Printable,
        _ => {
            debug_assert!(false, "bad segment class in {:?}", token);
            return None;
        }
    };
    let spec = chars.as_str();
    let segment = if let Some((min, max)) = spec.split_once("..") {
        Segment {
            class,
            min: if min.is_empty() { 1 } else { min.parse().ok()? },
            max: max.parse().ok()?,
        }
    } else {
        let width = spec.parse().ok()?;
        Segment {
            class,
            min: width,
            max: width,
        }
    };
    debug_assert!(segment.min <= segment.max && segment.max > 0);
    Some(segment)
}

const fn ai(
    ai: &'static str,
    format: &'static str,
    fnc1_required: bool,
    data_title: &'static str,
    description: &'static str,
) -> ApplicationIdentifier {
    ApplicationIdentifier {
        ai,
        description,
        data_title,
        format,
        fnc1_required,
    }
}

#[rustfmt::skip]
static AI_TABLE: &[ApplicationIdentifier] = &[
    ai("00", "N2+N18", false, "SSCC", "Serial Shipping Container Code (SSCC)"),
    ai("01", "N2+N14", false, "GTIN", "Global Trade Item Number (GTIN)"),
    ai("02", "N2+N14", false, "CONTENT", "GTIN of contained trade items"),
    ai("10", "N2+X..20", true, "BATCH/LOT", "Batch or lot number"),
    ai("11", "N2+N6", false, "PROD DATE", "Production date (YYMMDD)"),
    ai("12", "N2+N6", false, "DUE DATE", "Due date (YYMMDD)"),
    ai("13", "N2+N6", false, "PACK DATE", "Packaging date (YYMMDD)"),
    ai("15", "N2+N6", false, "BEST BEFORE or BEST BY", "Best before date (YYMMDD)"),
    ai("16", "N2+N6", false, "SELL BY", "Sell by date (YYMMDD)"),
    ai("17", "N2+N6", false, "USE BY OR EXPIRY", "Expiration date (YYMMDD)"),
    ai("20", "N2+N2", false, "VARIANT", "Internal product variant"),
    ai("21", "N2+X..20", true, "SERIAL", "Serial number"),
    ai("22", "N2+X..20", true, "CPV", "Consumer product variant"),
    ai("235", "N3+X..28", true, "TPX", "Third Party Controlled, Serialised Extension of GTIN (TPX)"),
    ai("240", "N3+X..30", true, "ADDITIONAL ID", "Additional product identification assigned by the manufacturer"),
    ai("241", "N3+X..30", true, "CUST. PART NO.", "Customer part number"),
    ai("242", "N3+N..6", true, "MTO VARIANT", "Made-to-Order variation number"),
    ai("243", "N3+X..20", true, "PCN", "Packaging component number"),
    ai("250", "N3+X..30", true, "SECONDARY SERIAL", "Secondary serial number"),
    ai("251", "N3+X..30", true, "REF. TO SOURCE", "Reference to source entity"),
    ai("253", "N3+N13+X..17", true, "GDTI", "Global Document Type Identifier (GDTI)"),
    ai("254", "N3+X..20", true, "GLN EXTENSION COMPONENT", "GLN extension component"),
    ai("255", "N3+N13+N..12", true, "GCN", "Global Coupon Number (GCN)"),
    ai("30", "N2+N..8", true, "VAR. COUNT", "Variable count of items (variable measure trade item)"),
    ai("3100", "N4+N6", false, "NET WEIGHT (kg)", "Net weight, kilograms (variable measure trade item)"),
    ai("3101", "N4+N6", false, "NET WEIGHT (kg)", "Net weight, kilograms (variable measure trade item)"),
    ai("3102", "N4+N6", false, "NET WEIGHT (kg)", "Net weight, kilograms (variable measure trade item)"),
    ai("3103", "N4+N6", false, "NET WEIGHT (kg)", "Net weight, kilograms (variable measure trade item)"),
    ai("3104", "N4+N6", false, "NET WEIGHT (kg)", "Net weight, kilograms (variable measure trade item)"),
    ai("3105", "N4+N6", false, "NET WEIGHT (kg)", "Net weight, kilograms (variable measure trade item)"),
    ai("3110", "N4+N6", false, "LENGTH (m)", "Length or first dimension, metres (variable measure trade item)"),
    ai("3111", "N4+N6", false, "LENGTH (m)", "Length or first dimension, metres (variable measure trade item)"),
    ai("3112", "N4+N6", false, "LENGTH (m)", "Length or first dimension, metres (variable measure trade item)"),
    ai("3113", "N4+N6", false, "LENGTH (m)", "Length or first dimension, metres (variable measure trade item)"),
    ai("3114", "N4+N6", false, "LENGTH (m)", "Length or first dimension, metres (variable measure trade item)"),
    ai("3115", "N4+N6", false, "LENGTH (m)", "Length or first dimension, metres (variable measure trade item)"),
    ai("3120", "N4+N6", false, "WIDTH (m)", "Width, diameter, or second dimension, metres (variable measure trade item)"),
    ai("3121", "N4+N6", false, "WIDTH (m)", "Width, diameter, or second dimension, metres (variable measure trade item)"),
    ai("3122", "N4+N6", false, "WIDTH (m)", "Width, diameter, or second dimension, metres (variable measure trade item)"),
    ai("3123", "N4+N6", false, "WIDTH (m)", "Width, diameter, or second dimension, metres (variable measure trade item)"),
    ai("3124", "N4+N6", false, "WIDTH (m)", "Width, diameter, or second dimension, metres (variable measure trade item)"),
    ai("3125", "N4+N6", false, "WIDTH (m)", "Width, diameter, or second dimension, metres (variable measure trade item)"),
    ai("3130", "N4+N6", false, "HEIGHT (m)", "Depth, thickness, height, or third dimension, metres (variable measure trade item)"),
    ai("3131", "N4+N6", false, "HEIGHT (m)", "Depth, thickness, height, or third dimension, metres (variable measure trade item)"),
    ai("3132", "N4+N6", false, "HEIGHT (m)", "Depth, thickness, height, or third dimension, metres (variable measure trade item)"),
    ai("3133", "N4+N6", false, "HEIGHT (m)", "Depth, thickness, height, or third dimension, metres (variable measure trade item)"),
    ai("3134", "N4+N6", false, "HEIGHT (m)", "Depth, thickness, height, or third dimension, metres (variable measure trade item)"),
    ai("3135", "N4+N6", false, "HEIGHT (m)", "Depth, thickness, height, or third dimension, metres (variable measure trade item)"),
    ai("3140", "N4+N6", false, "AREA (m2)", "Area, square metres (variable measure trade item)"),
    ai("3141", "N4+N6", false, "AREA (m2)", "Area, square metres (variable measure trade item)"),
    ai("3142", "N4+N6", false, "AREA (m2)", "Area, square metres (variable measure trade item)"),
    ai("3143", "N4+N6", false, "AREA (m2)", "Area, square metres (variable measure trade item)"),
    ai("3144", "N4+N6", false, "AREA (m2)", "Area, square metres (variable measure trade item)"),
    ai("3145", "N4+N6", false, "AREA (m2)", "Area, square metres (variable measure trade item)"),
    ai("3150", "N4+N6", false, "NET VOLUME (l)", "Net volume, litres (variable measure trade item)"),
    ai("3151", "N4+N6", false, "NET VOLUME (l)", "Net volume, litres (variable measure trade item)"),
    ai("3152", "N4+N6", false, "NET VOLUME (l)", "Net volume, litres (variable measure trade item)"),
    ai("3153", "N4+N6", false, "NET VOLUME (l)", "Net volume, litres (variable measure trade item)"),
    ai("3154", "N4+N6", false, "NET VOLUME (l)", "Net volume, litres (variable measure trade item)"),
    ai("3155", "N4+N6", false, "NET VOLUME (l)", "Net volume, litres (variable measure trade item)"),
    ai("3160", "N4+N6", false, "NET VOLUME (m3)", "Net volume, cubic metres (variable measure trade item)"),
    ai("3161", "N4+N6", false, "NET VOLUME (m3)", "Net volume, cubic metres (variable measure trade item)"),
    ai("3162", "N4+N6", false, "NET VOLUME (m3)", "Net volume, cubic metres (variable measure trade item)"),
    ai("3163", "N4+N6", false, "NET VOLUME (m3)", "Net volume, cubic metres (variable measure trade item)"),
    ai("3164", "N4+N6", false, "NET VOLUME (m3)", "Net volume, cubic metres (variable measure trade item)"),
    ai("3165", "N4+N6", false, "NET VOLUME (m3)", "Net volume, cubic metres (variable measure trade item)"),
    ai("3200", "N4+N6", false, "NET WEIGHT (lb)", "Net weight, pounds (variable measure trade item)"),
    ai("3201", "N4+N6", false, "NET WEIGHT (lb)", "Net weight, pounds (variable measure trade item)"),
    ai("3202", "N4+N6", false, "NET WEIGHT (lb)", "Net weight, pounds (variable measure trade item)"),
    ai("3203", "N4+N6", false, "NET WEIGHT (lb)", "Net weight, pounds (variable measure trade item)"),
    ai("3204", "N4+N6", false, "NET WEIGHT (lb)", "Net weight, pounds (variable measure trade item)"),
    ai("3205", "N4+N6", false, "NET WEIGHT (lb)", "Net weight, pounds (variable measure trade item)"),
    ai("3300", "N4+N6", false, "GROSS WEIGHT (kg)", "Logistic weight, kilograms"),
    ai("3301", "N4+N6", false, "GROSS WEIGHT (kg)", "Logistic weight, kilograms"),
    ai("3302", "N4+N6", false, "GROSS WEIGHT (kg)", "Logistic weight, kilograms"),
    ai("3303", "N4+N6", false, "GROSS WEIGHT (kg)", "Logistic weight, kilograms"),
    ai("3304", "N4+N6", false, "GROSS WEIGHT (kg)", "Logistic weight, kilograms"),
    ai("3305", "N4+N6", false, "GROSS WEIGHT (kg)", "Logistic weight, kilograms"),
    ai("3310", "N4+N6", false, "LENGTH (m), log", "Length or first dimension, metres (logistic unit)"),
    ai("3311", "N4+N6", false, "LENGTH (m), log", "Length or first dimension, metres (logistic unit)"),
    ai("3312", "N4+N6", false, "LENGTH (m), log", "Length or first dimension, metres (logistic unit)"),
    ai("3313", "N4+N6", false, "LENGTH (m), log", "Length or first dimension, metres (logistic unit)"),
    ai("3314", "N4+N6", false, "LENGTH (m), log", "Length or first dimension, metres (logistic unit)"),
    ai("3315", "N4+N6", false, "LENGTH (m), log", "Length or first dimension, metres (logistic unit)"),
    ai("3320", "N4+N6", false, "WIDTH (m), log", "Width, diameter, or second dimension, metres (logistic unit)"),
    ai("3321", "N4+N6", false, "WIDTH (m), log", "Width, diameter, or second dimension, metres (logistic unit)"),
    ai("3322", "N4+N6", false, "WIDTH (m), log", "Width, diameter, or second dimension, metres (logistic unit)"),
    ai("3323", "N4+N6", false, "WIDTH (m), log", "Width, diameter, or second dimension, metres (logistic unit)"),
    ai("3324", "N4+N6", false, "WIDTH (m), log", "Width, diameter, or second dimension, metres (logistic unit)"),
    ai("3325", "N4+N6", false, "WIDTH (m), log", "Width, diameter, or second dimension, metres (logistic unit)"),
    ai("3330", "N4+N6", false, "HEIGHT (m), log", "Depth, thickness, height, or third dimension, metres (logistic unit)"),
    ai("3331", "N4+N6", false, "HEIGHT (m), log", "Depth, thickness, height, or third dimension, metres (logistic unit)"),
    ai("3332", "N4+N6", false, "HEIGHT (m), log", "Depth, thickness, height, or third dimension, metres (logistic unit)"),
    ai("3333", "N4+N6", false, "HEIGHT (m), log", "Depth, thickness, height, or third dimension, metres (logistic unit)"),
    ai("3334", "N4+N6", false, "HEIGHT (m), log", "Depth, thickness, height, or third dimension, metres (logistic unit)"),
    ai("3335", "N4+N6", false, "HEIGHT (m), log", "Depth, thickness, height, or third dimension, metres (logistic unit)"),
    ai("3340", "N4+N6", false, "AREA (m2), log", "Area, square metres (logistic unit)"),
    ai("3341", "N4+N6", false, "AREA (m2), log", "Area, square metres (logistic unit)"),
    ai("3342", "N4+N6", false, "AREA (m2), log", "Area, square metres (logistic unit)"),
    ai("3343", "N4+N6", false, "AREA (m2), log", "Area, square metres (logistic unit)"),
    ai("3344", "N4+N6", false, "AREA (m2), log", "Area, square metres (logistic unit)"),
    ai("3345", "N4+N6", false, "AREA (m2), log", "Area, square metres (logistic unit)"),
    ai("3350", "N4+N6", false, "VOLUME (l), log", "Gross volume, litres (logistic unit)"),
    ai("3351", "N4+N6", false, "VOLUME (l), log", "Gross volume, litres (logistic unit)"),
    ai("3352", "N4+N6", false, "VOLUME (l), log", "Gross volume, litres (logistic unit)"),
    ai("3353", "N4+N6", false, "VOLUME (l), log", "Gross volume, litres (logistic unit)"),
    ai("3354", "N4+N6", false, "VOLUME (l), log", "Gross volume, litres (logistic unit)"),
    ai("3355", "N4+N6", false, "VOLUME (l), log", "Gross volume, litres (logistic unit)"),
    ai("3360", "N4+N6", false, "VOLUME (m3), log", "Gross volume, cubic metres (logistic unit)"),
    ai("3361", "N4+N6", false, "VOLUME (m3), log", "Gross volume, cubic metres (logistic unit)"),
    ai("3362", "N4+N6", false, "VOLUME (m3), log", "Gross volume, cubic metres (logistic unit)"),
    ai("3363", "N4+N6", false, "VOLUME (m3), log", "Gross volume, cubic metres (logistic unit)"),
    ai("3364", "N4+N6", false, "VOLUME (m3), log", "Gross volume, cubic metres (logistic unit)"),
    ai("3365", "N4+N6", false, "VOLUME (m3), log", "Gross volume, cubic metres (logistic unit)"),
    ai("37", "N2+N..8", true, "COUNT", "Count of trade items contained in a logistic unit"),
    ai("3900", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3901", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3902", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3903", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3904", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3905", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3906", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3907", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3908", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3909", "N4+N..15", true, "AMOUNT", "Amount payable or coupon value, local currency"),
    ai("3910", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3911", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3912", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3913", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3914", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3915", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3916", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3917", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3918", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3919", "N4+N3+N..15", true, "AMOUNT", "Amount payable and ISO currency code"),
    ai("3920", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3921", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3922", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3923", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3924", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3925", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3926", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3927", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3928", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3929", "N4+N..15", true, "PRICE", "Amount payable for a variable measure trade item, local currency"),
    ai("3930", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3931", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3932", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3933", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3934", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3935", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3936", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3937", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3938", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3939", "N4+N3+N..15", true, "PRICE", "Amount payable for a variable measure trade item and ISO currency code"),
    ai("3940", "N4+N4", false, "PRCNT OFF", "Percentage discount of a coupon"),
    ai("3941", "N4+N4", false, "PRCNT OFF", "Percentage discount of a coupon"),
    ai("3942", "N4+N4", false, "PRCNT OFF", "Percentage discount of a coupon"),
    ai("3943", "N4+N4", false, "PRCNT OFF", "Percentage discount of a coupon"),
    ai("400", "N3+X..30", true, "ORDER NUMBER", "Customer's purchase order number"),
    ai("401", "N3+X..30", true, "GINC", "Global Identification Number for Consignment (GINC)"),
    ai("402", "N3+N17", false, "GSIN", "Global Shipment Identification Number (GSIN)"),
    ai("403", "N3+X..30", true, "ROUTE", "Routing code"),
    ai("410", "N3+N13", false, "SHIP TO LOC", "Ship to / Deliver to Global Location Number"),
    ai("411", "N3+N13", false, "BILL TO", "Bill to / Invoice to Global Location Number"),
    ai("412", "N3+N13", false, "PURCHASE FROM", "Purchased from Global Location Number"),
    ai("413", "N3+N13", false, "SHIP FOR LOC", "Ship for / Deliver for / Forward to Global Location Number"),
    ai("414", "N3+N13", false, "LOC No", "Identification of a physical location Global Location Number"),
    ai("415", "N3+N13", false, "PAY TO", "Global Location Number of the invoicing party"),
    ai("416", "N3+N13", false, "PROD/SERV LOC", "GLN of the production or service location"),
    ai("417", "N3+N13", false, "PARTY", "Party Global Location Number"),
    ai("420", "N3+X..20", true, "SHIP TO POST", "Ship to / Deliver to postal code within a single postal authority"),
    ai("421", "N3+N3+X..9", true, "SHIP TO POST", "Ship to / Deliver to postal code with three-digit ISO country code"),
    ai("422", "N3+N3", false, "ORIGIN", "Country of origin of a trade item"),
    ai("423", "N3+N3+N..12", true, "COUNTRY - INITIAL PROCESS.", "Country of initial processing"),
    ai("424", "N3+N3", false, "COUNTRY - PROCESS.", "Country of processing"),
    ai("425", "N3+N3+N..12", true, "COUNTRY - DISASSEMBLY", "Country of disassembly"),
    ai("426", "N3+N3", false, "COUNTRY - FULL PROCESS", "Country covering the full process chain"),
    ai("427", "N3+X..3", true, "ORIGIN SUBDIVISION", "Country subdivision of origin"),
    ai("7001", "N4+N13", false, "NSN", "NATO Stock Number (NSN)"),
    ai("7002", "N4+X..30", true, "MEAT CUT", "UN/ECE meat carcasses and cuts classification"),
    ai("7003", "N4+N10", false, "EXPIRY TIME", "Expiration date and time (YYMMDDHHMM)"),
    ai("7004", "N4+N..4", true, "ACTIVE POTENCY", "Active potency"),
    ai("7005", "N4+X..12", true, "CATCH AREA", "Catch area"),
    ai("7006", "N4+N6", false, "FIRST FREEZE DATE", "First freeze date (YYMMDD)"),
    ai("7007", "N4+N6..12", true, "HARVEST DATE", "Harvest date or date range (YYMMDD or YYMMDDYYMMDD)"),
    ai("7008", "N4+X..3", true, "AQUATIC SPECIES", "Species for fishery purposes"),
    ai("7009", "N4+X..10", true, "FISHING GEAR TYPE", "Fishing gear type"),
    ai("7010", "N4+X..2", true, "PROD METHOD", "Production method"),
    ai("8001", "N4+N14", false, "DIMENSIONS", "Roll products: width, length, core diameter, direction, splices"),
    ai("8002", "N4+X..20", true, "CMT No", "Cellular mobile telephone identifier"),
    ai("8003", "N4+N14+X..16", true, "GRAI", "Global Returnable Asset Identifier (GRAI)"),
    ai("8004", "N4+X..30", true, "GIAI", "Global Individual Asset Identifier (GIAI)"),
    ai("8005", "N4+N6", false, "PRICE PER UNIT", "Price per unit of measure"),
    ai("8006", "N4+N14+N2+N2", false, "ITIP", "Identification of an individual trade item piece"),
    ai("8007", "N4+X..34", true, "IBAN", "International Bank Account Number (IBAN)"),
    ai("8008", "N4+N8+N..4", true, "PROD TIME", "Date and time of production"),
    ai("8010", "N4+Y..30", true, "CPID", "Component / Part Identifier (CPID)"),
    ai("8011", "N4+N..12", true, "CPID SERIAL", "Component / Part Identifier serial number"),
    ai("8012", "N4+X..20", true, "VERSION", "Software version"),
    ai("8013", "N4+X..25", true, "GMN", "Global Model Number (GMN)"),
    ai("8017", "N4+N18", false, "GSRN - PROVIDER", "Global Service Relation Number, service provider"),
    ai("8018", "N4+N18", false, "GSRN - RECIPIENT", "Global Service Relation Number, service recipient"),
    ai("8019", "N4+N..10", true, "SRIN", "Service Relation Instance Number (SRIN)"),
    ai("8020", "N4+X..25", true, "REF No", "Payment slip reference number"),
    ai("8026", "N4+N14+N2+N2", false, "ITIP CONTENT", "ITIP of pieces contained in a logistic unit"),
    ai("90", "N2+X..30", true, "INTERNAL", "Information mutually agreed between trading partners"),
    ai("91", "N2+X..90", true, "INTERNAL", "Company internal information"),
    ai("92", "N2+X..90", true, "INTERNAL", "Company internal information"),
    ai("93", "N2+X..90", true, "INTERNAL", "Company internal information"),
    ai("94", "N2+X..90", true, "INTERNAL", "Company internal information"),
    ai("95", "N2+X..90", true, "INTERNAL", "Company internal information"),
    ai("96", "N2+X..90", true, "INTERNAL", "Company internal information"),
    ai("97", "N2+X..90", true, "INTERNAL", "Company internal information"),
    ai("98", "N2+X..90", true, "INTERNAL", "Company internal information"),
    ai("99", "N2+X..90", true, "INTERNAL", "Company internal information"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let entry = ApplicationIdentifier::lookup("01").unwrap();
        assert_eq!(entry.data_title, "GTIN");
        assert!(!entry.fnc1_required);
        assert!(ApplicationIdentifier::lookup("05").is_none());
    }

    #[test]
    fn test_extract_prefix_is_longest_match() {
        // "3103..." must match the four-digit AI, not a shorter one.
        let entry = ApplicationIdentifier::extract_prefix("3103000195").unwrap();
        assert_eq!(entry.ai, "3103");

        let entry = ApplicationIdentifier::extract_prefix("0105901234123457").unwrap();
        assert_eq!(entry.ai, "01");

        assert!(ApplicationIdentifier::extract_prefix("xy").is_none());
        assert!(ApplicationIdentifier::extract_prefix("0").is_none());
    }

    #[test]
    fn test_value_segments() {
        let entry = ApplicationIdentifier::lookup("01").unwrap();
        assert_eq!(
            entry.value_segments(),
            vec![Segment { class: CharClass::Digit, min: 14, max: 14 }]
        );

        let entry = ApplicationIdentifier::lookup("10").unwrap();
        assert_eq!(
            entry.value_segments(),
            vec![Segment { class: CharClass::Cset82, min: 1, max: 20 }]
        );

        let entry = ApplicationIdentifier::lookup("3910").unwrap();
        assert_eq!(
            entry.value_segments(),
            vec![
                Segment { class: CharClass::Digit, min: 3, max: 3 },
                Segment { class: CharClass::Digit, min: 1, max: 15 },
            ]
        );

        let entry = ApplicationIdentifier::lookup("7007").unwrap();
        assert_eq!(
            entry.value_segments(),
            vec![Segment { class: CharClass::Digit, min: 6, max: 12 }]
        );
    }

    #[test]
    fn test_every_format_parses_and_fnc1_matches_variability() {
        for entry in AI_TABLE {
            let segments = entry.value_segments();
            assert!(!segments.is_empty(), "no segments for AI {}", entry.ai);
            let variable = segments.last().map(Segment::is_variable).unwrap_or(false);
            assert_eq!(
                entry.fnc1_required, variable,
                "fnc1_required mismatch for AI {}",
                entry.ai
            );
        }
    }
}
