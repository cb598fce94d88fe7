//! Built-in English country table.
//!
//! One declaration feeds two structures: the assignment-ordered slice the
//! ordered views are derived from, and a phf map for direct code lookup.
//! First label per entry is the display name; the rest are ranked
//! alternates.

use phf::{Map, phf_map};

use crate::label::LabelValue;
use crate::record::RawCountryRecord;

/// Language tag of the built-in table.
pub const LOCALE: &str = "en";

macro_rules! country_table {
    ($($code:literal => [$($label:literal),+ $(,)?]),+ $(,)?) => {
        /// The table in ISO 3166-1 alpha-2 assignment order.
        pub static COUNTRY_TABLE: &[(&str, &[&str])] = &[
            $(($code, &[$($label),+])),+
        ];

        static LABEL_LOOKUP: Map<&'static str, &'static [&'static str]> = phf_map! {
            $($code => &[$($label),+] as &[&str]),+
        };
    };
}

country_table! {
    "AD" => ["Andorra"],
    "AE" => ["United Arab Emirates", "UAE"],
    "AF" => ["Afghanistan"],
    "AG" => ["Antigua and Barbuda"],
    "AI" => ["Anguilla"],
    "AL" => ["Albania"],
    "AM" => ["Armenia"],
    "AO" => ["Angola"],
    "AQ" => ["Antarctica"],
    "AR" => ["Argentina"],
    "AS" => ["American Samoa"],
    "AT" => ["Austria"],
    "AU" => ["Australia"],
    "AW" => ["Aruba"],
    "AX" => ["Åland Islands"],
    "AZ" => ["Azerbaijan"],
    "BA" => ["Bosnia and Herzegovina"],
    "BB" => ["Barbados"],
    "BD" => ["Bangladesh"],
    "BE" => ["Belgium"],
    "BF" => ["Burkina Faso"],
    "BG" => ["Bulgaria"],
    "BH" => ["Bahrain"],
    "BI" => ["Burundi"],
    "BJ" => ["Benin"],
    "BL" => ["Saint Barthélemy"],
    "BM" => ["Bermuda"],
    "BN" => ["Brunei Darussalam", "Brunei"],
    "BO" => ["Bolivia", "Plurinational State of Bolivia"],
    "BQ" => ["Bonaire, Sint Eustatius and Saba"],
    "BR" => ["Brazil"],
    "BS" => ["Bahamas"],
    "BT" => ["Bhutan"],
    "BV" => ["Bouvet Island"],
    "BW" => ["Botswana"],
    "BY" => ["Belarus"],
    "BZ" => ["Belize"],
    "CA" => ["Canada"],
    "CC" => ["Cocos (Keeling) Islands"],
    "CD" => ["Democratic Republic of the Congo", "Congo-Kinshasa", "DR Congo"],
    "CF" => ["Central African Republic"],
    "CG" => ["Republic of the Congo", "Congo-Brazzaville", "Congo"],
    "CH" => ["Switzerland"],
    "CI" => ["Côte d'Ivoire", "Ivory Coast"],
    "CK" => ["Cook Islands"],
    "CL" => ["Chile"],
    "CM" => ["Cameroon"],
    "CN" => ["China"],
    "CO" => ["Colombia"],
    "CR" => ["Costa Rica"],
    "CU" => ["Cuba"],
    "CV" => ["Cabo Verde", "Cape Verde"],
    "CW" => ["Curaçao"],
    "CX" => ["Christmas Island"],
    "CY" => ["Cyprus"],
    "CZ" => ["Czechia", "Czech Republic"],
    "DE" => ["Germany"],
    "DJ" => ["Djibouti"],
    "DK" => ["Denmark"],
    "DM" => ["Dominica"],
    "DO" => ["Dominican Republic"],
    "DZ" => ["Algeria"],
    "EC" => ["Ecuador"],
    "EE" => ["Estonia"],
    "EG" => ["Egypt"],
    "EH" => ["Western Sahara"],
    "ER" => ["Eritrea"],
    "ES" => ["Spain"],
    "ET" => ["Ethiopia"],
    "FI" => ["Finland"],
    "FJ" => ["Fiji"],
    "FK" => ["Falkland Islands", "Malvinas"],
    "FM" => ["Micronesia", "Federated States of Micronesia"],
    "FO" => ["Faroe Islands"],
    "FR" => ["France"],
    "GA" => ["Gabon"],
    "GB" => ["United Kingdom", "UK", "Great Britain"],
    "GD" => ["Grenada"],
    "GE" => ["Georgia"],
    "GF" => ["French Guiana"],
    "GG" => ["Guernsey"],
    "GH" => ["Ghana"],
    "GI" => ["Gibraltar"],
    "GL" => ["Greenland"],
    "GM" => ["Gambia"],
    "GN" => ["Guinea"],
    "GP" => ["Guadeloupe"],
    "GQ" => ["Equatorial Guinea"],
    "GR" => ["Greece"],
    "GS" => ["South Georgia and the South Sandwich Islands"],
    "GT" => ["Guatemala"],
    "GU" => ["Guam"],
    "GW" => ["Guinea-Bissau"],
    "GY" => ["Guyana"],
    "HK" => ["Hong Kong"],
    "HM" => ["Heard Island and McDonald Islands"],
    "HN" => ["Honduras"],
    "HR" => ["Croatia"],
    "HT" => ["Haiti"],
    "HU" => ["Hungary"],
    "ID" => ["Indonesia"],
    "IE" => ["Ireland"],
    "IL" => ["Israel"],
    "IM" => ["Isle of Man"],
    "IN" => ["India"],
    "IO" => ["British Indian Ocean Territory"],
    "IQ" => ["Iraq"],
    "IR" => ["Iran", "Islamic Republic of Iran"],
    "IS" => ["Iceland"],
    "IT" => ["Italy"],
    "JE" => ["Jersey"],
    "JM" => ["Jamaica"],
    "JO" => ["Jordan"],
    "JP" => ["Japan"],
    "KE" => ["Kenya"],
    "KG" => ["Kyrgyzstan"],
    "KH" => ["Cambodia"],
    "KI" => ["Kiribati"],
    "KM" => ["Comoros"],
    "KN" => ["Saint Kitts and Nevis"],
    "KP" => ["North Korea", "Democratic People's Republic of Korea"],
    "KR" => ["South Korea", "Republic of Korea"],
    "KW" => ["Kuwait"],
    "KY" => ["Cayman Islands"],
    "KZ" => ["Kazakhstan"],
    "LA" => ["Laos", "Lao People's Democratic Republic"],
    "LB" => ["Lebanon"],
    "LC" => ["Saint Lucia"],
    "LI" => ["Liechtenstein"],
    "LK" => ["Sri Lanka"],
    "LR" => ["Liberia"],
    "LS" => ["Lesotho"],
    "LT" => ["Lithuania"],
    "LU" => ["Luxembourg"],
    "LV" => ["Latvia"],
    "LY" => ["Libya"],
    "MA" => ["Morocco"],
    "MC" => ["Monaco"],
    "MD" => ["Moldova", "Republic of Moldova"],
    "ME" => ["Montenegro"],
    "MF" => ["Saint Martin"],
    "MG" => ["Madagascar"],
    "MH" => ["Marshall Islands"],
    "MK" => ["North Macedonia", "Macedonia"],
    "ML" => ["Mali"],
    "MM" => ["Myanmar", "Burma"],
    "MN" => ["Mongolia"],
    "MO" => ["Macao", "Macau"],
    "MP" => ["Northern Mariana Islands"],
    "MQ" => ["Martinique"],
    "MR" => ["Mauritania"],
    "MS" => ["Montserrat"],
    "MT" => ["Malta"],
    "MU" => ["Mauritius"],
    "MV" => ["Maldives"],
    "MW" => ["Malawi"],
    "MX" => ["Mexico"],
    "MY" => ["Malaysia"],
    "MZ" => ["Mozambique"],
    "NA" => ["Namibia"],
    "NC" => ["New Caledonia"],
    "NE" => ["Niger"],
    "NF" => ["Norfolk Island"],
    "NG" => ["Nigeria"],
    "NI" => ["Nicaragua"],
    "NL" => ["Netherlands"],
    "NO" => ["Norway"],
    "NP" => ["Nepal"],
    "NR" => ["Nauru"],
    "NU" => ["Niue"],
    "NZ" => ["New Zealand"],
    "OM" => ["Oman"],
    "PA" => ["Panama"],
    "PE" => ["Peru"],
    "PF" => ["French Polynesia"],
    "PG" => ["Papua New Guinea"],
    "PH" => ["Philippines"],
    "PK" => ["Pakistan"],
    "PL" => ["Poland"],
    "PM" => ["Saint Pierre and Miquelon"],
    "PN" => ["Pitcairn"],
    "PR" => ["Puerto Rico"],
    "PS" => ["Palestine", "State of Palestine"],
    "PT" => ["Portugal"],
    "PW" => ["Palau"],
    "PY" => ["Paraguay"],
    "QA" => ["Qatar"],
    "RE" => ["Réunion"],
    "RO" => ["Romania"],
    "RS" => ["Serbia"],
    "RU" => ["Russia", "Russian Federation"],
    "RW" => ["Rwanda"],
    "SA" => ["Saudi Arabia"],
    "SB" => ["Solomon Islands"],
    "SC" => ["Seychelles"],
    "SD" => ["Sudan"],
    "SE" => ["Sweden"],
    "SG" => ["Singapore"],
    "SH" => ["Saint Helena, Ascension and Tristan da Cunha"],
    "SI" => ["Slovenia"],
    "SJ" => ["Svalbard and Jan Mayen"],
    "SK" => ["Slovakia"],
    "SL" => ["Sierra Leone"],
    "SM" => ["San Marino"],
    "SN" => ["Senegal"],
    "SO" => ["Somalia"],
    "SR" => ["Suriname"],
    "SS" => ["South Sudan"],
    "ST" => ["Sao Tome and Principe"],
    "SV" => ["El Salvador"],
    "SX" => ["Sint Maarten"],
    "SY" => ["Syria", "Syrian Arab Republic"],
    "SZ" => ["Eswatini", "Swaziland"],
    "TC" => ["Turks and Caicos Islands"],
    "TD" => ["Chad"],
    "TF" => ["French Southern Territories"],
    "TG" => ["Togo"],
    "TH" => ["Thailand"],
    "TJ" => ["Tajikistan"],
    "TK" => ["Tokelau"],
    "TL" => ["Timor-Leste", "East Timor"],
    "TM" => ["Turkmenistan"],
    "TN" => ["Tunisia"],
    "TO" => ["Tonga"],
    "TR" => ["Türkiye", "Turkey"],
    "TT" => ["Trinidad and Tobago"],
    "TV" => ["Tuvalu"],
    "TW" => ["Taiwan", "Taiwan, Province of China"],
    "TZ" => ["Tanzania", "United Republic of Tanzania"],
    "UA" => ["Ukraine"],
    "UG" => ["Uganda"],
    "UM" => ["United States Minor Outlying Islands"],
    "US" => ["United States of America", "USA", "United States"],
    "UY" => ["Uruguay"],
    "UZ" => ["Uzbekistan"],
    "VA" => ["Holy See", "Vatican City"],
    "VC" => ["Saint Vincent and the Grenadines"],
    "VE" => ["Venezuela", "Bolivarian Republic of Venezuela"],
    "VG" => ["British Virgin Islands", "Virgin Islands (British)"],
    "VI" => ["U.S. Virgin Islands", "Virgin Islands (U.S.)"],
    "VN" => ["Vietnam", "Viet Nam"],
    "VU" => ["Vanuatu"],
    "WF" => ["Wallis and Futuna"],
    "WS" => ["Samoa"],
    "YE" => ["Yemen"],
    "YT" => ["Mayotte"],
    "ZA" => ["South Africa"],
    "ZM" => ["Zambia"],
    "ZW" => ["Zimbabwe"],
}

/// Build a [`RawCountryRecord`] from the built-in table, assignment order.
pub fn english() -> RawCountryRecord {
    COUNTRY_TABLE
        .iter()
        .map(|&(code, labels)| (code, LabelValue::from(labels)))
        .collect()
}

/// Labels for one code, any casing, without building a record.
pub fn lookup(code: &str) -> Option<&'static [&'static str]> {
    LABEL_LOOKUP
        .get(crate::code::fold_upper(code).as_str())
        .copied()
}

/// Display name (first label) for one code, any casing.
pub fn display_name(code: &str) -> Option<&'static str> {
    lookup(code).and_then(|labels| labels.first().copied())
}
