//! Static currency data shipped with the binary.
//!
//! These tables decide offline behavior: the catalog shown when no provider
//! answers, and the approximate rates used when no live rate can be fetched.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Currency every approximate rate is quoted against.
pub const APPROXIMATE_ANCHOR: &str = "USD";

/// Sort priority for catalog presentation.
pub const POPULAR: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "INR", "KRW",
];

/// Display symbols.
const SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CHF", "₣"),
    ("CAD", "C$"),
    ("AUD", "A$"),
    ("CNY", "¥"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
    ("PLN", "zł"),
    ("CZK", "Kč"),
    ("HUF", "Ft"),
    ("RUB", "₽"),
    ("BRL", "R$"),
    ("MXN", "$"),
    ("SGD", "S$"),
    ("NZD", "NZ$"),
    ("THB", "฿"),
    ("TRY", "₺"),
    ("ZAR", "R"),
    ("ILS", "₪"),
    ("AED", "د.إ"),
    ("SAR", "﷼"),
    ("QAR", "﷼"),
    ("KWD", "د.ك"),
    ("BHD", ".د.ب"),
    ("OMR", "﷼"),
    ("JOD", "د.ا"),
    ("EGP", "£"),
    ("LBP", "£"),
    ("SYP", "£"),
    ("IQD", "ع.د"),
    ("IRR", "﷼"),
    ("AFN", "؋"),
    ("PKR", "₨"),
    ("BDT", "৳"),
    ("LKR", "₨"),
    ("NPR", "₨"),
    ("BTN", "Nu."),
    ("MVR", ".ރ"),
    ("MMK", "Ks"),
    ("LAK", "₭"),
    ("KHR", "៛"),
    ("VND", "₫"),
    ("IDR", "Rp"),
    ("MYR", "RM"),
    ("PHP", "₱"),
    ("TWD", "NT$"),
    ("HKD", "HK$"),
    ("MOP", "MOP$"),
    ("BND", "B$"),
    ("FJD", "FJ$"),
    ("PGK", "K"),
    ("SBD", "SI$"),
    ("VUV", "VT"),
    ("WST", "WS$"),
    ("TOP", "T$"),
    ("MNT", "₮"),
    ("KPW", "₩"),
    ("KZT", "₸"),
    ("UZS", "лв"),
    ("KGS", "лв"),
    ("TJS", "SM"),
    ("TMT", "T"),
    ("AZN", "₼"),
    ("GEL", "₾"),
    ("AMD", "֏"),
    ("UAH", "₴"),
    ("BYN", "Br"),
    ("MDL", "L"),
    ("RON", "lei"),
    ("BGN", "лв"),
    ("HRK", "kn"),
    ("RSD", "Дин."),
    ("MKD", "ден"),
    ("ALL", "L"),
    ("BAM", "KM"),
    ("ISK", "kr"),
    ("ARS", "$"),
    ("BOB", "$b"),
    ("CLP", "$"),
    ("COP", "$"),
    ("PEN", "S/"),
    ("UYU", "$U"),
    ("PYG", "Gs"),
    ("VES", "Bs"),
    ("GYD", "$"),
    ("SRD", "$"),
    ("TTD", "TT$"),
    ("BBD", "$"),
    ("JMD", "J$"),
    ("BSD", "$"),
    ("BZD", "BZ$"),
    ("GTQ", "Q"),
    ("HNL", "L"),
    ("NIO", "C$"),
    ("CRC", "₡"),
    ("PAB", "B/."),
    ("DOP", "RD$"),
    ("HTG", "G"),
    ("CUP", "₱"),
    ("XCD", "$"),
    ("AWG", "ƒ"),
    ("ANG", "ƒ"),
    ("BMD", "$"),
    ("KYD", "$"),
    ("NGN", "₦"),
    ("GHS", "¢"),
    ("KES", "KSh"),
    ("UGX", "USh"),
    ("TZS", "TSh"),
    ("ETB", "Br"),
    ("MUR", "₨"),
    ("BWP", "P"),
    ("XOF", "CFA"),
    ("XAF", "FCFA"),
    ("MAD", "MAD"),
    ("TND", "د.ت"),
    ("DZD", "دج"),
    ("LYD", "ل.د"),
    ("SDG", "ج.س."),
    ("SOS", "S"),
    ("DJF", "Fdj"),
    ("ERN", "Nfk"),
    ("CDF", "FC"),
    ("AOA", "Kz"),
    ("ZMW", "ZK"),
    ("ZWL", "Z$"),
    ("MWK", "MK"),
    ("MZN", "MT"),
    ("SZL", "E"),
    ("LSL", "M"),
    ("NAD", "N$"),
    ("MGA", "Ar"),
    ("KMF", "CF"),
    ("SCR", "₨"),
    ("CVE", "$"),
    ("STD", "Db"),
    ("GNF", "GNF"),
    ("SLL", "Le"),
    ("LRD", "L$"),
    ("GMD", "D"),
    ("MRT", "UM"),
    ("RWF", "R₣"),
    ("BIF", "FBu"),
];

/// Display names used to label provider catalogs.
const NAMES: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound Sterling"),
    ("JPY", "Japanese Yen"),
    ("CHF", "Swiss Franc"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
    ("NZD", "New Zealand Dollar"),
    ("CNY", "Chinese Yuan"),
    ("INR", "Indian Rupee"),
    ("KRW", "South Korean Won"),
    ("SGD", "Singapore Dollar"),
    ("HKD", "Hong Kong Dollar"),
    ("SEK", "Swedish Krona"),
    ("NOK", "Norwegian Krone"),
    ("DKK", "Danish Krone"),
    ("PLN", "Polish Zloty"),
    ("CZK", "Czech Koruna"),
    ("HUF", "Hungarian Forint"),
    ("RUB", "Russian Ruble"),
    ("BRL", "Brazilian Real"),
    ("MXN", "Mexican Peso"),
    ("ZAR", "South African Rand"),
    ("TRY", "Turkish Lira"),
    ("THB", "Thai Baht"),
    ("MYR", "Malaysian Ringgit"),
    ("IDR", "Indonesian Rupiah"),
    ("PHP", "Philippine Peso"),
    ("VND", "Vietnamese Dong"),
    ("ILS", "Israeli New Shekel"),
    ("AED", "UAE Dirham"),
    ("SAR", "Saudi Riyal"),
    ("QAR", "Qatari Riyal"),
    ("KWD", "Kuwaiti Dinar"),
    ("BHD", "Bahraini Dinar"),
    ("OMR", "Omani Rial"),
    ("JOD", "Jordanian Dinar"),
    ("EGP", "Egyptian Pound"),
    ("NGN", "Nigerian Naira"),
    ("ARS", "Argentine Peso"),
    ("CLP", "Chilean Peso"),
    ("COP", "Colombian Peso"),
    ("PEN", "Peruvian Sol"),
    ("RON", "Romanian Leu"),
    ("BGN", "Bulgarian Lev"),
    ("UAH", "Ukrainian Hryvnia"),
    ("PKR", "Pakistani Rupee"),
    ("BDT", "Bangladeshi Taka"),
    ("LKR", "Sri Lankan Rupee"),
    ("MMK", "Myanmar Kyat"),
    ("TWD", "Taiwan New Dollar"),
    ("ISK", "Icelandic Króna"),
    ("IQD", "Iraqi Dinar"),
    ("IRR", "Iranian Rial"),
    ("AFN", "Afghan Afghani"),
    ("ALL", "Albanian Lek"),
    ("AMD", "Armenian Dram"),
    ("ANG", "Netherlands Antillean Guilder"),
    ("AOA", "Angolan Kwanza"),
    ("AWG", "Aruban Florin"),
    ("AZN", "Azerbaijani Manat"),
    ("BAM", "Bosnia-Herzegovina Convertible Mark"),
    ("BBD", "Barbadian Dollar"),
    ("BND", "Brunei Dollar"),
    ("BOB", "Bolivian Boliviano"),
    ("BSD", "Bahamian Dollar"),
    ("BTN", "Bhutanese Ngultrum"),
    ("BWP", "Botswana Pula"),
    ("BYN", "Belarusian Ruble"),
    ("BZD", "Belize Dollar"),
    ("CDF", "Congolese Franc"),
    ("CRC", "Costa Rican Colón"),
    ("CUP", "Cuban Peso"),
    ("CVE", "Cape Verdean Escudo"),
    ("DJF", "Djiboutian Franc"),
    ("DOP", "Dominican Peso"),
    ("DZD", "Algerian Dinar"),
    ("ERN", "Eritrean Nakfa"),
    ("ETB", "Ethiopian Birr"),
    ("FJD", "Fijian Dollar"),
    ("GEL", "Georgian Lari"),
    ("GHS", "Ghanaian Cedi"),
    ("GMD", "Gambian Dalasi"),
    ("GNF", "Guinean Franc"),
    ("GTQ", "Guatemalan Quetzal"),
    ("GYD", "Guyanese Dollar"),
    ("HNL", "Honduran Lempira"),
    ("HRK", "Croatian Kuna"),
    ("HTG", "Haitian Gourde"),
    ("JMD", "Jamaican Dollar"),
    ("KES", "Kenyan Shilling"),
    ("KGS", "Kyrgystani Som"),
    ("KHR", "Cambodian Riel"),
    ("KMF", "Comorian Franc"),
    ("KPW", "North Korean Won"),
    ("KZT", "Kazakhstani Tenge"),
    ("LAK", "Laotian Kip"),
    ("LBP", "Lebanese Pound"),
    ("LRD", "Liberian Dollar"),
    ("LSL", "Lesotho Loti"),
    ("LYD", "Libyan Dinar"),
    ("MAD", "Moroccan Dirham"),
    ("MDL", "Moldovan Leu"),
    ("MGA", "Malagasy Ariary"),
    ("MKD", "Macedonian Denar"),
    ("MNT", "Mongolian Tugrik"),
    ("MOP", "Macanese Pataca"),
    ("MRT", "Mauritanian Ouguiya"),
    ("MUR", "Mauritian Rupee"),
    ("MVR", "Maldivian Rufiyaa"),
    ("MWK", "Malawian Kwacha"),
    ("MZN", "Mozambican Metical"),
    ("NAD", "Namibian Dollar"),
    ("NIO", "Nicaraguan Córdoba"),
    ("NPR", "Nepalese Rupee"),
    ("PAB", "Panamanian Balboa"),
    ("PGK", "Papua New Guinean Kina"),
    ("PYG", "Paraguayan Guarani"),
    ("RSD", "Serbian Dinar"),
    ("RWF", "Rwandan Franc"),
    ("SBD", "Solomon Islands Dollar"),
    ("SCR", "Seychellois Rupee"),
    ("SDG", "Sudanese Pound"),
    ("SLL", "Sierra Leonean Leone"),
    ("SOS", "Somali Shilling"),
    ("SRD", "Surinamese Dollar"),
    ("STD", "São Tomé and Príncipe Dobra"),
    ("SVC", "Salvadoran Colón"),
    ("SYP", "Syrian Pound"),
    ("SZL", "Swazi Lilangeni"),
    ("TJS", "Tajikistani Somoni"),
    ("TMT", "Turkmenistani Manat"),
    ("TND", "Tunisian Dinar"),
    ("TOP", "Tongan Paʻanga"),
    ("TTD", "Trinidad and Tobago Dollar"),
    ("TZS", "Tanzanian Shilling"),
    ("UGX", "Ugandan Shilling"),
    ("UYU", "Uruguayan Peso"),
    ("UZS", "Uzbekistani Som"),
    ("VES", "Venezuelan Bolívar"),
    ("VUV", "Vanuatu Vatu"),
    ("WST", "Samoan Tala"),
    ("XAF", "Central African CFA Franc"),
    ("XCD", "East Caribbean Dollar"),
    ("XOF", "West African CFA Franc"),
    ("XPF", "CFP Franc"),
    ("YER", "Yemeni Rial"),
    ("ZMW", "Zambian Kwacha"),
    ("ZWL", "Zimbabwean Dollar"),
];

/// The catalog served when every catalog provider is unavailable.
const OFFLINE_CATALOG: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound Sterling"),
    ("JPY", "Japanese Yen"),
    ("CHF", "Swiss Franc"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
    ("NZD", "New Zealand Dollar"),
    ("CNY", "Chinese Yuan"),
    ("INR", "Indian Rupee"),
    ("KRW", "South Korean Won"),
    ("SGD", "Singapore Dollar"),
    ("HKD", "Hong Kong Dollar"),
    ("SEK", "Swedish Krona"),
    ("NOK", "Norwegian Krone"),
    ("DKK", "Danish Krone"),
    ("PLN", "Polish Zloty"),
    ("CZK", "Czech Koruna"),
    ("HUF", "Hungarian Forint"),
    ("RUB", "Russian Ruble"),
    ("BRL", "Brazilian Real"),
    ("MXN", "Mexican Peso"),
    ("ZAR", "South African Rand"),
    ("TRY", "Turkish Lira"),
    ("THB", "Thai Baht"),
    ("MYR", "Malaysian Ringgit"),
    ("IDR", "Indonesian Rupiah"),
    ("PHP", "Philippine Peso"),
    ("VND", "Vietnamese Dong"),
    ("ILS", "Israeli New Shekel"),
    ("AED", "UAE Dirham"),
    ("SAR", "Saudi Riyal"),
    ("QAR", "Qatari Riyal"),
    ("KWD", "Kuwaiti Dinar"),
    ("BHD", "Bahraini Dinar"),
    ("OMR", "Omani Rial"),
    ("JOD", "Jordanian Dinar"),
    ("LBP", "Lebanese Pound"),
    ("EGP", "Egyptian Pound"),
    ("MAD", "Moroccan Dirham"),
    ("TND", "Tunisian Dinar"),
    ("DZD", "Algerian Dinar"),
    ("NGN", "Nigerian Naira"),
    ("GHS", "Ghanaian Cedi"),
    ("KES", "Kenyan Shilling"),
    ("UGX", "Ugandan Shilling"),
    ("TZS", "Tanzanian Shilling"),
    ("ETB", "Ethiopian Birr"),
    ("MUR", "Mauritian Rupee"),
    ("BWP", "Botswana Pula"),
    ("XOF", "West African CFA Franc"),
    ("XAF", "Central African CFA Franc"),
    ("RON", "Romanian Leu"),
    ("BGN", "Bulgarian Lev"),
    ("HRK", "Croatian Kuna"),
    ("RSD", "Serbian Dinar"),
    ("MKD", "Macedonian Denar"),
    ("ALL", "Albanian Lek"),
    ("BAM", "Bosnia-Herzegovina Convertible Mark"),
    ("MDL", "Moldovan Leu"),
    ("UAH", "Ukrainian Hryvnia"),
    ("BYN", "Belarusian Ruble"),
    ("GEL", "Georgian Lari"),
    ("AMD", "Armenian Dram"),
    ("AZN", "Azerbaijani Manat"),
    ("KZT", "Kazakhstani Tenge"),
    ("UZS", "Uzbekistani Som"),
    ("KGS", "Kyrgystani Som"),
    ("TJS", "Tajikistani Somoni"),
    ("TMT", "Turkmenistani Manat"),
    ("AFN", "Afghan Afghani"),
    ("PKR", "Pakistani Rupee"),
    ("BDT", "Bangladeshi Taka"),
    ("LKR", "Sri Lankan Rupee"),
    ("NPR", "Nepalese Rupee"),
    ("BTN", "Bhutanese Ngultrum"),
    ("MVR", "Maldivian Rufiyaa"),
    ("MMK", "Myanmar Kyat"),
    ("LAK", "Laotian Kip"),
    ("KHR", "Cambodian Riel"),
    ("BND", "Brunei Dollar"),
    ("TWD", "Taiwan New Dollar"),
    ("MOP", "Macanese Pataca"),
    ("MNT", "Mongolian Tugrik"),
    ("KPW", "North Korean Won"),
    ("FJD", "Fijian Dollar"),
    ("PGK", "Papua New Guinean Kina"),
    ("SBD", "Solomon Islands Dollar"),
    ("VUV", "Vanuatu Vatu"),
    ("WST", "Samoan Tala"),
    ("TOP", "Tongan Paʻanga"),
    ("ARS", "Argentine Peso"),
    ("BOB", "Bolivian Boliviano"),
    ("CLP", "Chilean Peso"),
    ("COP", "Colombian Peso"),
    ("PEN", "Peruvian Sol"),
    ("UYU", "Uruguayan Peso"),
    ("PYG", "Paraguayan Guarani"),
    ("VES", "Venezuelan Bolívar"),
    ("GYD", "Guyanese Dollar"),
    ("SRD", "Surinamese Dollar"),
    ("TTD", "Trinidad and Tobago Dollar"),
    ("BBD", "Barbadian Dollar"),
    ("JMD", "Jamaican Dollar"),
    ("BSD", "Bahamian Dollar"),
    ("BZD", "Belize Dollar"),
    ("GTQ", "Guatemalan Quetzal"),
    ("HNL", "Honduran Lempira"),
    ("NIO", "Nicaraguan Córdoba"),
    ("CRC", "Costa Rican Colón"),
    ("PAB", "Panamanian Balboa"),
    ("DOP", "Dominican Peso"),
    ("HTG", "Haitian Gourde"),
    ("CUP", "Cuban Peso"),
    ("XCD", "East Caribbean Dollar"),
    ("AWG", "Aruban Florin"),
    ("ANG", "Netherlands Antillean Guilder"),
    ("BMD", "Bermudian Dollar"),
    ("KYD", "Cayman Islands Dollar"),
    ("ISK", "Icelandic Króna"),
    ("FOK", "Faroese Króna"),
    ("IQD", "Iraqi Dinar"),
    ("IRR", "Iranian Rial"),
    ("YER", "Yemeni Rial"),
    ("SYP", "Syrian Pound"),
    ("LYD", "Libyan Dinar"),
    ("SDG", "Sudanese Pound"),
    ("SOS", "Somali Shilling"),
    ("DJF", "Djiboutian Franc"),
    ("ERN", "Eritrean Nakfa"),
    ("CDF", "Congolese Franc"),
    ("AOA", "Angolan Kwanza"),
    ("ZMW", "Zambian Kwacha"),
    ("ZWL", "Zimbabwean Dollar"),
    ("MWK", "Malawian Kwacha"),
    ("MZN", "Mozambican Metical"),
    ("SZL", "Swazi Lilangeni"),
    ("LSL", "Lesotho Loti"),
    ("NAD", "Namibian Dollar"),
    ("MGF", "Malagasy Franc"),
    ("KMF", "Comorian Franc"),
    ("SCR", "Seychellois Rupee"),
    ("CVE", "Cape Verdean Escudo"),
    ("STD", "São Tomé and Príncipe Dobra"),
    ("GNF", "Guinean Franc"),
    ("SLL", "Sierra Leonean Leone"),
    ("LRD", "Liberian Dollar"),
    ("CIV", "Ivorian Franc"),
    ("BFA", "Burkinabé Franc"),
    ("MLI", "Malian Franc"),
    ("NER", "Nigerien Franc"),
    ("SEN", "Senegalese Franc"),
    ("GMD", "Gambian Dalasi"),
    ("GWP", "Guinea-Bissau Peso"),
    ("MRT", "Mauritanian Ouguiya"),
    ("ECS", "Ecuadorian Sucre"),
    ("SVC", "Salvadoran Colón"),
];

/// Approximate rates against USD, used only when no live provider answers.
const APPROXIMATE_RATES: &[(&str, Decimal)] = &[
    ("USD", dec!(1.0)),
    ("EUR", dec!(0.85)),
    ("GBP", dec!(0.73)),
    ("JPY", dec!(150.0)),
    ("CAD", dec!(1.35)),
    ("AUD", dec!(1.50)),
    ("CHF", dec!(0.88)),
    ("CNY", dec!(7.20)),
    ("INR", dec!(83.0)),
    ("KRW", dec!(1320.0)),
    ("SGD", dec!(1.35)),
    ("HKD", dec!(7.80)),
    ("SEK", dec!(10.50)),
    ("NOK", dec!(10.80)),
    ("DKK", dec!(6.80)),
    ("PLN", dec!(4.20)),
    ("CZK", dec!(23.0)),
    ("HUF", dec!(360.0)),
    ("RUB", dec!(90.0)),
    ("BRL", dec!(5.20)),
    ("MXN", dec!(17.0)),
    ("ZAR", dec!(18.5)),
    ("TRY", dec!(28.0)),
    ("THB", dec!(35.0)),
    ("MYR", dec!(4.70)),
    ("IDR", dec!(15500.0)),
    ("PHP", dec!(56.0)),
    ("VND", dec!(24000.0)),
    ("ILS", dec!(3.70)),
    ("AED", dec!(3.67)),
    ("SAR", dec!(3.75)),
];

fn lookup<V: Copy>(table: &[(&str, V)], code: &str) -> Option<V> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, value)| *value)
}

pub fn symbol(code: &str) -> Option<&'static str> {
    lookup(SYMBOLS, code)
}

pub fn name(code: &str) -> Option<&'static str> {
    lookup(NAMES, code)
}

pub fn approximate_rate(code: &str) -> Option<Decimal> {
    lookup(APPROXIMATE_RATES, code)
}

/// Position in the popular list, if the code is popular.
pub fn popular_rank(code: &str) -> Option<usize> {
    POPULAR.iter().position(|popular| *popular == code)
}

/// `(code, display name)` pairs of the offline catalog.
pub fn offline_catalog() -> impl Iterator<Item = (&'static str, &'static str)> {
    OFFLINE_CATALOG.iter().copied()
}
