// crates/countrycodes-core/src/data.rs
//! The canonical ISO-3166-1 table, sorted by alpha-2 code.
//!
//! Alpha-3 is `""` when none was ever assigned; numeric is `-1` when none
//! was ever assigned.

use crate::model::{Assignment::*, CountryCode};

#[rustfmt::skip]
pub static COUNTRY_CODES: [CountryCode; 268] = [
    CountryCode::new("Ascension Island", "AC", "ASC", -1, "+247", ExceptionallyReserved),
    CountryCode::new("Andorra", "AD", "AND", 20, "+376", OfficiallyAssigned),
    CountryCode::new("United Arab Emirates", "AE", "ARE", 784, "+971", OfficiallyAssigned),
    CountryCode::new("Afghanistan", "AF", "AFG", 4, "+93", OfficiallyAssigned),
    CountryCode::new("Antigua and Barbuda", "AG", "ATG", 28, "+1-268", OfficiallyAssigned),
    CountryCode::new("Anguilla", "AI", "AIA", 660, "+1-264", OfficiallyAssigned),
    CountryCode::new("Albania", "AL", "ALB", 8, "+355", OfficiallyAssigned),
    CountryCode::new("Armenia", "AM", "ARM", 51, "+374", OfficiallyAssigned),
    CountryCode::new("Netherlands Antilles", "AN", "ANHH", 530, "+599", TransitionallyReserved),
    CountryCode::new("Angola", "AO", "AGO", 24, "+244", OfficiallyAssigned),
    CountryCode::new("Antarctica", "AQ", "ATA", 10, "+672", OfficiallyAssigned),
    CountryCode::new("Argentina", "AR", "ARG", 32, "+54", OfficiallyAssigned),
    CountryCode::new("American Samoa", "AS", "ASM", 16, "+1-684", OfficiallyAssigned),
    CountryCode::new("Austria", "AT", "AUT", 40, "+43", OfficiallyAssigned),
    CountryCode::new("Australia", "AU", "AUS", 36, "+61", OfficiallyAssigned),
    CountryCode::new("Aruba", "AW", "ABW", 533, "+297", OfficiallyAssigned),
    CountryCode::new("\u{212B}land Islands", "AX", "ALA", 248, "", OfficiallyAssigned),
    CountryCode::new("Azerbaijan", "AZ", "AZE", 31, "+994", OfficiallyAssigned),
    CountryCode::new("Bosnia and Herzegovina", "BA", "BIH", 70, "+387", OfficiallyAssigned),
    CountryCode::new("Barbados", "BB", "BRB", 52, "+1-246", OfficiallyAssigned),
    CountryCode::new("Bangladesh", "BD", "BGD", 50, "+880", OfficiallyAssigned),
    CountryCode::new("Belgium", "BE", "BEL", 56, "+32", OfficiallyAssigned),
    CountryCode::new("Burkina Faso", "BF", "BFA", 854, "+226", OfficiallyAssigned),
    CountryCode::new("Bulgaria", "BG", "BGR", 100, "+359", OfficiallyAssigned),
    CountryCode::new("Bahrain", "BH", "BHR", 48, "+973", OfficiallyAssigned),
    CountryCode::new("Burundi", "BI", "BDI", 108, "+257", OfficiallyAssigned),
    CountryCode::new("Benin", "BJ", "BEN", 204, "+229", OfficiallyAssigned),
    CountryCode::new("Saint Barth\u{00E9}lemy", "BL", "BLM", 652, "+590", OfficiallyAssigned),
    CountryCode::new("Bermuda", "BM", "BMU", 60, "+1-441", OfficiallyAssigned),
    CountryCode::new("Brunei Darussalam", "BN", "BRN", 96, "+673", OfficiallyAssigned),
    CountryCode::new("Bolivia, Plurinational State of", "BO", "BOL", 68, "+591", OfficiallyAssigned),
    CountryCode::new("Bonaire, Sint Eustatius and Saba", "BQ", "BES", 535, "+599", OfficiallyAssigned),
    CountryCode::new("Brazil", "BR", "BRA", 76, "+55", OfficiallyAssigned),
    CountryCode::new("Bahamas", "BS", "BHS", 44, "+1-242", OfficiallyAssigned),
    CountryCode::new("Bhutan", "BT", "BTN", 64, "+975", OfficiallyAssigned),
    CountryCode::new("Burma", "BU", "BUMM", 104, "+95", TransitionallyReserved),
    CountryCode::new("Bouvet Island", "BV", "BVT", 74, "", OfficiallyAssigned),
    CountryCode::new("Botswana", "BW", "BWA", 72, "+267", OfficiallyAssigned),
    CountryCode::new("Belarus", "BY", "BLR", 112, "+375", OfficiallyAssigned),
    CountryCode::new("Belize", "BZ", "BLZ", 84, "+501", OfficiallyAssigned),
    CountryCode::new("Canada", "CA", "CAN", 124, "+1", OfficiallyAssigned),
    CountryCode::new("Cocos (Keeling) Islands", "CC", "CCK", 166, "+61", OfficiallyAssigned),
    CountryCode::new("Congo, the Democratic Republic of the", "CD", "COD", 180, "+243", OfficiallyAssigned),
    CountryCode::new("Central African Republic", "CF", "CAF", 140, "+236", OfficiallyAssigned),
    CountryCode::new("Congo", "CG", "COG", 178, "+242", OfficiallyAssigned),
    CountryCode::new("Switzerland", "CH", "CHE", 756, "+41", OfficiallyAssigned),
    CountryCode::new("C\u{00F4}te d'Ivoire", "CI", "CIV", 384, "+225", OfficiallyAssigned),
    CountryCode::new("Cook Islands", "CK", "COK", 184, "+682", OfficiallyAssigned),
    CountryCode::new("Chile", "CL", "CHL", 152, "+56", OfficiallyAssigned),
    CountryCode::new("Cameroon", "CM", "CMR", 120, "+237", OfficiallyAssigned),
    CountryCode::new("China", "CN", "CHN", 156, "+86", OfficiallyAssigned),
    CountryCode::new("Colombia", "CO", "COL", 170, "+57", OfficiallyAssigned),
    CountryCode::new("Clipperton Island", "CP", "CPT", -1, "", ExceptionallyReserved),
    CountryCode::new("Costa Rica", "CR", "CRI", 188, "+506", OfficiallyAssigned),
    CountryCode::new("Serbia and Montenegro", "CS", "CSXX", 891, "+381", TransitionallyReserved),
    CountryCode::new("Cuba", "CU", "CUB", 192, "+53", OfficiallyAssigned),
    CountryCode::new("Cape Verde", "CV", "CPV", 132, "+238", OfficiallyAssigned),
    CountryCode::new("Cura\u{00E7}ao", "CW", "CUW", 531, "+599", OfficiallyAssigned),
    CountryCode::new("Christmas Island", "CX", "CXR", 162, "+61", OfficiallyAssigned),
    CountryCode::new("Cyprus", "CY", "CYP", 196, "+357", OfficiallyAssigned),
    CountryCode::new("Czech Republic", "CZ", "CZE", 203, "+420", OfficiallyAssigned),
    CountryCode::new("Germany", "DE", "DEU", 276, "+49", OfficiallyAssigned),
    CountryCode::new("Diego Garcia", "DG", "DGA", -1, "+246", ExceptionallyReserved),
    CountryCode::new("Djibouti", "DJ", "DJI", 262, "+253", OfficiallyAssigned),
    CountryCode::new("Denmark", "DK", "DNK", 208, "+45", OfficiallyAssigned),
    CountryCode::new("Dominica", "DM", "DMA", 212, "+1-767", OfficiallyAssigned),
    CountryCode::new("Dominican Republic", "DO", "DOM", 214, "+1-809, +1-829, +1-849", OfficiallyAssigned),
    CountryCode::new("Algeria", "DZ", "DZA", 12, "+213", OfficiallyAssigned),
    CountryCode::new("Ceuta, Melilla", "EA", "", -1, "", ExceptionallyReserved),
    CountryCode::new("Ecuador", "EC", "ECU", 218, "+593", OfficiallyAssigned),
    CountryCode::new("Estonia", "EE", "EST", 233, "+372", OfficiallyAssigned),
    CountryCode::new("Egypt", "EG", "EGY", 818, "+20", OfficiallyAssigned),
    CountryCode::new("Western Sahara", "EH", "ESH", 732, "+212", OfficiallyAssigned),
    CountryCode::new("Eritrea", "ER", "ERI", 232, "+291", OfficiallyAssigned),
    CountryCode::new("Spain", "ES", "ESP", 724, "+34", OfficiallyAssigned),
    CountryCode::new("Ethiopia", "ET", "ETH", 231, "+251", OfficiallyAssigned),
    CountryCode::new("European Union", "EU", "", -1, "", ExceptionallyReserved),
    CountryCode::new("Finland", "FI", "FIN", 246, "+358", OfficiallyAssigned),
    CountryCode::new("Fiji", "FJ", "FJI", 242, "+679", OfficiallyAssigned),
    CountryCode::new("Falkland Islands (Malvinas)", "FK", "FLK", 238, "+500", OfficiallyAssigned),
    CountryCode::new("Micronesia, Federated States of", "FM", "FSM", 583, "+691", OfficiallyAssigned),
    CountryCode::new("Faroe Islands", "FO", "FRO", 234, "+298", OfficiallyAssigned),
    CountryCode::new("France", "FR", "FRA", 250, "+33", OfficiallyAssigned),
    CountryCode::new("France, Metropolitan", "FX", "FXX", -1, "", ExceptionallyReserved),
    CountryCode::new("Gabon", "GA", "GAB", 266, "+241", OfficiallyAssigned),
    CountryCode::new("United Kingdom", "GB", "GBR", 826, "+44", OfficiallyAssigned),
    CountryCode::new("Grenada", "GD", "GRD", 308, "+1-473", OfficiallyAssigned),
    CountryCode::new("Georgia", "GE", "GEO", 268, "+995", OfficiallyAssigned),
    CountryCode::new("French Guiana", "GF", "GUF", 254, "+594", OfficiallyAssigned),
    CountryCode::new("Guernsey", "GG", "GGY", 831, "+44-1481", OfficiallyAssigned),
    CountryCode::new("Ghana", "GH", "GHA", 288, "+233", OfficiallyAssigned),
    CountryCode::new("Gibraltar", "GI", "GIB", 292, "+350", OfficiallyAssigned),
    CountryCode::new("Greenland", "GL", "GRL", 304, "+299", OfficiallyAssigned),
    CountryCode::new("Gambia", "GM", "GMB", 270, "+220", OfficiallyAssigned),
    CountryCode::new("Guinea", "GN", "GIN", 324, "+224", OfficiallyAssigned),
    CountryCode::new("Guadeloupe", "GP", "GLP", 312, "+590", OfficiallyAssigned),
    CountryCode::new("Equatorial Guinea", "GQ", "GNQ", 226, "+240", OfficiallyAssigned),
    CountryCode::new("Greece", "GR", "GRC", 300, "+30", OfficiallyAssigned),
    CountryCode::new("South Georgia and the South Sandwich Islands", "GS", "SGS", 239, "+500", OfficiallyAssigned),
    CountryCode::new("Guatemala", "GT", "GTM", 320, "+502", OfficiallyAssigned),
    CountryCode::new("Guam", "GU", "GUM", 316, "+1-671", OfficiallyAssigned),
    CountryCode::new("Guinea-Bissau", "GW", "GNB", 624, "+245", OfficiallyAssigned),
    CountryCode::new("Guyana", "GY", "GUY", 328, "+592", OfficiallyAssigned),
    CountryCode::new("Hong Kong", "HK", "HKG", 344, "+852", OfficiallyAssigned),
    CountryCode::new("Heard Island and McDonald Islands", "HM", "HMD", 334, "", OfficiallyAssigned),
    CountryCode::new("Honduras", "HN", "HND", 340, "+504", OfficiallyAssigned),
    CountryCode::new("Croatia", "HR", "HRV", 191, "+385", OfficiallyAssigned),
    CountryCode::new("Haiti", "HT", "HTI", 332, "+509", OfficiallyAssigned),
    CountryCode::new("Hungary", "HU", "HUN", 348, "+36", OfficiallyAssigned),
    CountryCode::new("Canary Islands", "IC", "", -1, "", ExceptionallyReserved),
    CountryCode::new("Indonesia", "ID", "IDN", 360, "+62", OfficiallyAssigned),
    CountryCode::new("Ireland", "IE", "IRL", 372, "+353", OfficiallyAssigned),
    CountryCode::new("Israel", "IL", "ISR", 376, "+972", OfficiallyAssigned),
    CountryCode::new("Isle of Man", "IM", "IMN", 833, "+44-1624", OfficiallyAssigned),
    CountryCode::new("India", "IN", "IND", 356, "+91", OfficiallyAssigned),
    CountryCode::new("British Indian Ocean Territory", "IO", "IOT", 86, "+246", OfficiallyAssigned),
    CountryCode::new("Iraq", "IQ", "IRQ", 368, "+964", OfficiallyAssigned),
    CountryCode::new("Iran, Islamic Republic of", "IR", "IRN", 364, "+98", OfficiallyAssigned),
    CountryCode::new("Iceland", "IS", "ISL", 352, "+354", OfficiallyAssigned),
    CountryCode::new("Italy", "IT", "ITA", 380, "+39", OfficiallyAssigned),
    CountryCode::new("Jersey", "JE", "JEY", 832, "+44-1534", OfficiallyAssigned),
    CountryCode::new("Jamaica", "JM", "JAM", 388, "+1-876", OfficiallyAssigned),
    CountryCode::new("Jordan", "JO", "JOR", 400, "+962", OfficiallyAssigned),
    CountryCode::new("Japan", "JP", "JPN", 392, "+81", OfficiallyAssigned),
    CountryCode::new("Kenya", "KE", "KEN", 404, "+254", OfficiallyAssigned),
    CountryCode::new("Kyrgyzstan", "KG", "KGZ", 417, "+996", OfficiallyAssigned),
    CountryCode::new("Cambodia", "KH", "KHM", 116, "+855", OfficiallyAssigned),
    CountryCode::new("Kiribati", "KI", "KIR", 296, "+686", OfficiallyAssigned),
    CountryCode::new("Comoros", "KM", "COM", 174, "+269", OfficiallyAssigned),
    CountryCode::new("Saint Kitts and Nevis", "KN", "KNA", 659, "+1-869", OfficiallyAssigned),
    CountryCode::new("Korea, Democratic People's Republic of", "KP", "PRK", 408, "+850", OfficiallyAssigned),
    CountryCode::new("Korea, Republic of", "KR", "KOR", 410, "+82", OfficiallyAssigned),
    CountryCode::new("Kuwait", "KW", "KWT", 414, "+965", OfficiallyAssigned),
    CountryCode::new("Cayman Islands", "KY", "CYM", 136, "+1-345", OfficiallyAssigned),
    CountryCode::new("Kazakhstan", "KZ", "KAZ", 398, "+7", OfficiallyAssigned),
    CountryCode::new("Lao People's Democratic Republic", "LA", "LAO", 418, "+856", OfficiallyAssigned),
    CountryCode::new("Lebanon", "LB", "LBN", 422, "+961", OfficiallyAssigned),
    CountryCode::new("Saint Lucia", "LC", "LCA", 662, "+1-758", OfficiallyAssigned),
    CountryCode::new("Liechtenstein", "LI", "LIE", 438, "+423", OfficiallyAssigned),
    CountryCode::new("Sri Lanka", "LK", "LKA", 144, "+94", OfficiallyAssigned),
    CountryCode::new("Liberia", "LR", "LBR", 430, "+231", OfficiallyAssigned),
    CountryCode::new("Lesotho", "LS", "LSO", 426, "+266", OfficiallyAssigned),
    CountryCode::new("Lithuania", "LT", "LTU", 440, "+370", OfficiallyAssigned),
    CountryCode::new("Luxembourg", "LU", "LUX", 442, "+352", OfficiallyAssigned),
    CountryCode::new("Latvia", "LV", "LVA", 428, "+371", OfficiallyAssigned),
    CountryCode::new("Libya", "LY", "LBY", 434, "+218", OfficiallyAssigned),
    CountryCode::new("Morocco", "MA", "MAR", 504, "+212", OfficiallyAssigned),
    CountryCode::new("Monaco", "MC", "MCO", 492, "+377", OfficiallyAssigned),
    CountryCode::new("Moldova, Republic of", "MD", "MDA", 498, "+373", OfficiallyAssigned),
    CountryCode::new("Montenegro", "ME", "MNE", 499, "+382", OfficiallyAssigned),
    CountryCode::new("Saint Martin (French part)", "MF", "MAF", 663, "+590", OfficiallyAssigned),
    CountryCode::new("Madagascar", "MG", "MDG", 450, "+261", OfficiallyAssigned),
    CountryCode::new("Marshall Islands", "MH", "MHL", 584, "+692", OfficiallyAssigned),
    CountryCode::new("Macedonia, the former Yugoslav Republic of", "MK", "MKD", 807, "+389", OfficiallyAssigned),
    CountryCode::new("Mali", "ML", "MLI", 466, "+223", OfficiallyAssigned),
    CountryCode::new("Myanmar", "MM", "MMR", 104, "+95", OfficiallyAssigned),
    CountryCode::new("Mongolia", "MN", "MNG", 496, "+976", OfficiallyAssigned),
    CountryCode::new("Macao", "MO", "MAC", 446, "+853", OfficiallyAssigned),
    CountryCode::new("Northern Mariana Islands", "MP", "MNP", 580, "+1-670", OfficiallyAssigned),
    CountryCode::new("Martinique", "MQ", "MTQ", 474, "+596", OfficiallyAssigned),
    CountryCode::new("Mauritania", "MR", "MRT", 478, "+222", OfficiallyAssigned),
    CountryCode::new("Montserrat", "MS", "MSR", 500, "+1-664", OfficiallyAssigned),
    CountryCode::new("Malta", "MT", "MLT", 470, "+356", OfficiallyAssigned),
    CountryCode::new("Mauritius", "MU", "MUS", 480, "+230", OfficiallyAssigned),
    CountryCode::new("Maldives", "MV", "MDV", 462, "+960", OfficiallyAssigned),
    CountryCode::new("Malawi", "MW", "MWI", 454, "+265", OfficiallyAssigned),
    CountryCode::new("Mexico", "MX", "MEX", 484, "+52", OfficiallyAssigned),
    CountryCode::new("Malaysia", "MY", "MYS", 458, "+60", OfficiallyAssigned),
    CountryCode::new("Mozambique", "MZ", "MOZ", 508, "+258", OfficiallyAssigned),
    CountryCode::new("Namibia", "NA", "NAM", 516, "+264", OfficiallyAssigned),
    CountryCode::new("New Caledonia", "NC", "NCL", 540, "+687", OfficiallyAssigned),
    CountryCode::new("Niger", "NE", "NER", 562, "+227", OfficiallyAssigned),
    CountryCode::new("Norfolk Island", "NF", "NFK", 574, "+672", OfficiallyAssigned),
    CountryCode::new("Nigeria", "NG", "NGA", 566, "+234", OfficiallyAssigned),
    CountryCode::new("Nicaragua", "NI", "NIC", 558, "+505", OfficiallyAssigned),
    CountryCode::new("Netherlands", "NL", "NLD", 528, "+31", OfficiallyAssigned),
    CountryCode::new("Norway", "NO", "NOR", 578, "+47", OfficiallyAssigned),
    CountryCode::new("Nepal", "NP", "NPL", 524, "+977", OfficiallyAssigned),
    CountryCode::new("Nauru", "NR", "NRU", 520, "+674", OfficiallyAssigned),
    CountryCode::new("Neutral Zone", "NT", "NTHH", 536, "", TransitionallyReserved),
    CountryCode::new("Niue", "NU", "NIU", 570, "+683", OfficiallyAssigned),
    CountryCode::new("New Zealand", "NZ", "NZL", 554, "+64", OfficiallyAssigned),
    CountryCode::new("Oman", "OM", "OMN", 512, "+968", OfficiallyAssigned),
    CountryCode::new("Panama", "PA", "PAN", 591, "+507", OfficiallyAssigned),
    CountryCode::new("Peru", "PE", "PER", 604, "+51", OfficiallyAssigned),
    CountryCode::new("French Polynesia", "PF", "PYF", 258, "+689", OfficiallyAssigned),
    CountryCode::new("Papua New Guinea", "PG", "PNG", 598, "+675", OfficiallyAssigned),
    CountryCode::new("Philippines", "PH", "PHL", 608, "+63", OfficiallyAssigned),
    CountryCode::new("Pakistan", "PK", "PAK", 586, "+92", OfficiallyAssigned),
    CountryCode::new("Poland", "PL", "POL", 616, "+48", OfficiallyAssigned),
    CountryCode::new("Saint Pierre and Miquelon", "PM", "SPM", 666, "+508", OfficiallyAssigned),
    CountryCode::new("Pitcairn", "PN", "PCN", 612, "+64", OfficiallyAssigned),
    CountryCode::new("Puerto Rico", "PR", "PRI", 630, "+1-787, +1-939", OfficiallyAssigned),
    CountryCode::new("Palestine, State of", "PS", "PSE", 275, "+970", OfficiallyAssigned),
    CountryCode::new("Portugal", "PT", "PRT", 620, "+351", OfficiallyAssigned),
    CountryCode::new("Palau", "PW", "PLW", 585, "+680", OfficiallyAssigned),
    CountryCode::new("Paraguay", "PY", "PRY", 600, "+595", OfficiallyAssigned),
    CountryCode::new("Qatar", "QA", "QAT", 634, "+974", OfficiallyAssigned),
    CountryCode::new("R\u{00E9}union", "RE", "REU", 638, "+262", OfficiallyAssigned),
    CountryCode::new("Romania", "RO", "ROU", 642, "+40", OfficiallyAssigned),
    CountryCode::new("Serbia", "RS", "SRB", 688, "+381", OfficiallyAssigned),
    CountryCode::new("Russian Federation", "RU", "RUS", 643, "+7", OfficiallyAssigned),
    CountryCode::new("Rwanda", "RW", "RWA", 646, "+250", OfficiallyAssigned),
    CountryCode::new("Saudi Arabia", "SA", "SAU", 682, "+966", OfficiallyAssigned),
    CountryCode::new("Solomon Islands", "SB", "SLB", 90, "+677", OfficiallyAssigned),
    CountryCode::new("Seychelles", "SC", "SYC", 690, "+248", OfficiallyAssigned),
    CountryCode::new("Sudan", "SD", "SDN", 729, "+249", OfficiallyAssigned),
    CountryCode::new("Sweden", "SE", "SWE", 752, "+46", OfficiallyAssigned),
    CountryCode::new("Finland", "SF", "FIN", 246, "+358", TransitionallyReserved),
    CountryCode::new("Singapore", "SG", "SGP", 702, "+65", OfficiallyAssigned),
    CountryCode::new("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN", 654, "+290", OfficiallyAssigned),
    CountryCode::new("Slovenia", "SI", "SVN", 705, "+386", OfficiallyAssigned),
    CountryCode::new("Svalbard and Jan Mayen", "SJ", "SJM", 744, "+47", OfficiallyAssigned),
    CountryCode::new("Slovakia", "SK", "SVK", 703, "+421", OfficiallyAssigned),
    CountryCode::new("Sierra Leone", "SL", "SLE", 694, "+232", OfficiallyAssigned),
    CountryCode::new("San Marino", "SM", "SMR", 674, "+378", OfficiallyAssigned),
    CountryCode::new("Senegal", "SN", "SEN", 686, "+221", OfficiallyAssigned),
    CountryCode::new("Somalia", "SO", "SOM", 706, "+252", OfficiallyAssigned),
    CountryCode::new("Suriname", "SR", "SUR", 740, "+597", OfficiallyAssigned),
    CountryCode::new("South Sudan", "SS", "SSD", 728, "+211", OfficiallyAssigned),
    CountryCode::new("Sao Tome and Principe", "ST", "STP", 678, "+239", OfficiallyAssigned),
    CountryCode::new("USSR", "SU", "SUN", -1, "+7", ExceptionallyReserved),
    CountryCode::new("El Salvador", "SV", "SLV", 222, "+503", OfficiallyAssigned),
    CountryCode::new("Sint Maarten (Dutch part)", "SX", "SXM", 534, "+1-721", OfficiallyAssigned),
    CountryCode::new("Syrian Arab Republic", "SY", "SYR", 760, "+963", OfficiallyAssigned),
    CountryCode::new("Swaziland", "SZ", "SWZ", 748, "+268", OfficiallyAssigned),
    CountryCode::new("Tristan da Cunha", "TA", "TAA", -1, "+290-8", ExceptionallyReserved),
    CountryCode::new("Turks and Caicos Islands", "TC", "TCA", 796, "+1-649", OfficiallyAssigned),
    CountryCode::new("Chad", "TD", "TCD", 148, "+235", OfficiallyAssigned),
    CountryCode::new("French Southern Territories", "TF", "ATF", 260, "", OfficiallyAssigned),
    CountryCode::new("Togo", "TG", "TGO", 768, "228", OfficiallyAssigned),
    CountryCode::new("Thailand", "TH", "THA", 764, "+66", OfficiallyAssigned),
    CountryCode::new("Tajikistan", "TJ", "TJK", 762, "+992", OfficiallyAssigned),
    CountryCode::new("Tokelau", "TK", "TKL", 772, "+690", OfficiallyAssigned),
    CountryCode::new("Timor-Leste", "TL", "TLS", 626, "+670", OfficiallyAssigned),
    CountryCode::new("Turkmenistan", "TM", "TKM", 795, "+993", OfficiallyAssigned),
    CountryCode::new("Tunisia", "TN", "TUN", 788, "+216", OfficiallyAssigned),
    CountryCode::new("Tonga", "TO", "TON", 776, "+676", OfficiallyAssigned),
    CountryCode::new("East Timor", "TP", "TPTL", 0, "+670", TransitionallyReserved),
    CountryCode::new("Turkey", "TR", "TUR", 792, "+90", OfficiallyAssigned),
    CountryCode::new("Trinidad and Tobago", "TT", "TTO", 780, "+1-868", OfficiallyAssigned),
    CountryCode::new("Tuvalu", "TV", "TUV", 798, "+688", OfficiallyAssigned),
    CountryCode::new("Taiwan, Province of China", "TW", "TWN", 158, "+886", OfficiallyAssigned),
    CountryCode::new("Tanzania, United Republic of", "TZ", "TZA", 834, "+255", OfficiallyAssigned),
    CountryCode::new("Ukraine", "UA", "UKR", 804, "+380", OfficiallyAssigned),
    CountryCode::new("Uganda", "UG", "UGA", 800, "+256", OfficiallyAssigned),
    CountryCode::new("United Kingdom", "UK", "", -1, "+44", ExceptionallyReserved),
    CountryCode::new("United States Minor Outlying Islands", "UM", "UMI", 581, "+1", OfficiallyAssigned),
    CountryCode::new("United States", "US", "USA", 840, "+1", OfficiallyAssigned),
    CountryCode::new("Uruguay", "UY", "URY", 858, "+598", OfficiallyAssigned),
    CountryCode::new("Uzbekistan", "UZ", "UZB", 860, "+998", OfficiallyAssigned),
    CountryCode::new("Holy See (Vatican City State)", "VA", "VAT", 336, "+379", OfficiallyAssigned),
    CountryCode::new("Saint Vincent and the Grenadines", "VC", "VCT", 670, "+1-784", OfficiallyAssigned),
    CountryCode::new("Venezuela, Bolivarian Republic of", "VE", "VEN", 862, "+58", OfficiallyAssigned),
    CountryCode::new("Virgin Islands, British", "VG", "VGB", 92, "+1-284", OfficiallyAssigned),
    CountryCode::new("Virgin Islands, U.S.", "VI", "VIR", 850, "+1-340", OfficiallyAssigned),
    CountryCode::new("Viet Nam", "VN", "VNM", 704, "+84", OfficiallyAssigned),
    CountryCode::new("Vanuatu", "VU", "VUT", 548, "+678", OfficiallyAssigned),
    CountryCode::new("Wallis and Futuna", "WF", "WLF", 876, "+681", OfficiallyAssigned),
    CountryCode::new("Samoa", "WS", "WSM", 882, "+685", OfficiallyAssigned),
    CountryCode::new("Kosovo, Republic of", "XK", "XXK", -1, "+383", UserAssigned),
    CountryCode::new("Yemen", "YE", "YEM", 887, "+967", OfficiallyAssigned),
    CountryCode::new("Mayotte", "YT", "MYT", 175, "+262", OfficiallyAssigned),
    CountryCode::new("Yugoslavia", "YU", "YUCS", 890, "+38", TransitionallyReserved),
    CountryCode::new("South Africa", "ZA", "ZAF", 710, "+27", OfficiallyAssigned),
    CountryCode::new("Zambia", "ZM", "ZMB", 894, "+260", OfficiallyAssigned),
    CountryCode::new("Zaire", "ZR", "ZRCD", 0, "+243", TransitionallyReserved),
    CountryCode::new("Zimbabwe", "ZW", "ZWE", 716, "+263", OfficiallyAssigned),
];
