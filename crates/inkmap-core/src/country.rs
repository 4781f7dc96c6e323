//! Country reference data: map anchors, display names, ISO code mappings.
//!
//! All tables are static configuration. The anchor table in particular is the
//! single source of truth for where a country's cluster may attach: a country
//! absent from it cannot be placed on the map.

use crate::geom::{MapPoint, map_point};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Display language for country names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Zh,
}

/// Country visual centers (longitude, latitude) in map degrees.
const COUNTRY_ANCHORS: &[(&str, f64, f64)] = &[
    ("CN", 104.0, 35.0),
    ("US", -95.0, 38.0),
    ("GB", -2.0, 54.0),
    ("FR", 2.0, 46.0),
    ("DE", 10.0, 51.0),
    ("JP", 138.0, 36.0),
    ("KR", 127.0, 36.0),
    ("IN", 78.0, 22.0),
    ("BR", -52.0, -10.0),
    ("RU", 100.0, 60.0),
    ("AU", 134.0, -25.0),
    ("CA", -106.0, 56.0),
    ("IT", 12.0, 42.0),
    ("ES", -4.0, 40.0),
    ("MX", -102.0, 23.0),
    ("ID", 120.0, -2.0),
    ("TR", 35.0, 39.0),
    ("SA", 45.0, 24.0),
    ("AR", -64.0, -34.0),
    ("ZA", 25.0, -29.0),
    ("TH", 101.0, 15.0),
    ("EG", 30.0, 27.0),
    ("PL", 19.0, 52.0),
    ("NL", 5.0, 52.0),
    ("BE", 4.0, 50.0),
    ("SE", 15.0, 62.0),
    ("NO", 10.0, 62.0),
    ("DK", 10.0, 56.0),
    ("FI", 26.0, 64.0),
    ("CH", 8.0, 47.0),
    ("AT", 14.0, 47.0),
    ("PT", -8.0, 39.0),
    ("GR", 22.0, 39.0),
    ("CZ", 15.0, 50.0),
    ("IE", -8.0, 53.0),
    ("NZ", 172.0, -41.0),
    ("SG", 104.0, 1.0),
    ("MY", 102.0, 4.0),
    ("PH", 122.0, 12.0),
    ("VN", 106.0, 16.0),
    ("PK", 69.0, 30.0),
    ("BD", 90.0, 24.0),
    ("IR", 53.0, 32.0),
    ("IQ", 44.0, 33.0),
    ("AF", 66.0, 34.0),
    ("UA", 32.0, 49.0),
    ("RO", 25.0, 46.0),
    ("HU", 20.0, 47.0),
    ("CL", -71.0, -33.0),
    ("CO", -72.0, 4.0),
    ("PE", -76.0, -10.0),
    ("VE", -66.0, 8.0),
    ("NG", 8.0, 10.0),
    ("KE", 38.0, 1.0),
    ("ET", 39.0, 9.0),
    ("MA", -6.0, 32.0),
    ("DZ", 3.0, 28.0),
    ("TN", 9.0, 34.0),
    ("LY", 17.0, 27.0),
    ("SD", 30.0, 16.0),
    ("IS", -19.0, 65.0),
    ("NP", 84.0, 28.0),
    ("LK", 81.0, 7.0),
    ("MM", 96.0, 20.0),
    ("KH", 105.0, 12.0),
    ("LA", 103.0, 18.0),
    ("MN", 104.0, 46.0),
    ("KZ", 67.0, 48.0),
    ("UZ", 64.0, 41.0),
    ("TM", 59.0, 39.0),
    ("AZ", 48.0, 40.0),
    ("GE", 43.0, 42.0),
    ("AM", 45.0, 40.0),
    ("BY", 28.0, 53.0),
    ("LT", 24.0, 55.0),
    ("LV", 25.0, 57.0),
    ("EE", 26.0, 59.0),
    ("SK", 20.0, 49.0),
    ("SI", 15.0, 46.0),
    ("HR", 16.0, 45.0),
    ("BA", 18.0, 44.0),
    ("RS", 21.0, 44.0),
    ("BG", 25.0, 43.0),
    ("MK", 22.0, 41.0),
    ("AL", 20.0, 41.0),
    ("CU", -79.0, 22.0),
    ("DO", -70.0, 19.0),
    ("JM", -77.0, 18.0),
    ("HT", -72.0, 19.0),
    ("PR", -66.0, 18.0),
];

/// (alpha-2, English name, Chinese name).
const COUNTRY_NAMES: &[(&str, &str, &str)] = &[
    ("CN", "China", "中国"),
    ("US", "United States", "美国"),
    ("GB", "United Kingdom", "英国"),
    ("FR", "France", "法国"),
    ("DE", "Germany", "德国"),
    ("JP", "Japan", "日本"),
    ("RU", "Russia", "俄罗斯"),
    ("IT", "Italy", "意大利"),
    ("ES", "Spain", "西班牙"),
    ("BR", "Brazil", "巴西"),
    ("IN", "India", "印度"),
    ("AU", "Australia", "澳大利亚"),
    ("CA", "Canada", "加拿大"),
    ("MX", "Mexico", "墨西哥"),
    ("AR", "Argentina", "阿根廷"),
    ("EG", "Egypt", "埃及"),
    ("ZA", "South Africa", "南非"),
    ("KR", "South Korea", "韩国"),
    ("TR", "Turkey", "土耳其"),
    ("SA", "Saudi Arabia", "沙特阿拉伯"),
    ("IR", "Iran", "伊朗"),
    ("TH", "Thailand", "泰国"),
    ("VN", "Vietnam", "越南"),
    ("ID", "Indonesia", "印度尼西亚"),
    ("MY", "Malaysia", "马来西亚"),
    ("PH", "Philippines", "菲律宾"),
    ("PK", "Pakistan", "巴基斯坦"),
    ("BD", "Bangladesh", "孟加拉国"),
    ("NG", "Nigeria", "尼日利亚"),
    ("KE", "Kenya", "肯尼亚"),
    ("SE", "Sweden", "瑞典"),
    ("NO", "Norway", "挪威"),
    ("DK", "Denmark", "丹麦"),
    ("FI", "Finland", "芬兰"),
    ("NL", "Netherlands", "荷兰"),
    ("BE", "Belgium", "比利时"),
    ("CH", "Switzerland", "瑞士"),
    ("AT", "Austria", "奥地利"),
    ("PL", "Poland", "波兰"),
    ("CZ", "Czech Republic", "捷克"),
    ("GR", "Greece", "希腊"),
    ("PT", "Portugal", "葡萄牙"),
    ("IE", "Ireland", "爱尔兰"),
    ("NZ", "New Zealand", "新西兰"),
    ("CL", "Chile", "智利"),
    ("CO", "Colombia", "哥伦比亚"),
    ("PE", "Peru", "秘鲁"),
    ("UA", "Ukraine", "乌克兰"),
    ("RO", "Romania", "罗马尼亚"),
    ("HU", "Hungary", "匈牙利"),
    ("IL", "Israel", "以色列"),
    ("AE", "United Arab Emirates", "阿联酋"),
    ("SG", "Singapore", "新加坡"),
    ("HK", "Hong Kong, China", "中国香港"),
    ("AF", "Afghanistan", "阿富汗"),
    ("AL", "Albania", "阿尔巴尼亚"),
    ("DZ", "Algeria", "阿尔及利亚"),
    ("AO", "Angola", "安哥拉"),
    ("BY", "Belarus", "白俄罗斯"),
    ("BO", "Bolivia", "玻利维亚"),
    ("BG", "Bulgaria", "保加利亚"),
    ("KH", "Cambodia", "柬埔寨"),
    ("CM", "Cameroon", "喀麦隆"),
    ("CD", "DR Congo", "刚果民主共和国"),
    ("CU", "Cuba", "古巴"),
    ("EC", "Ecuador", "厄瓜多尔"),
    ("ET", "Ethiopia", "埃塞俄比亚"),
    ("GH", "Ghana", "加纳"),
    ("GT", "Guatemala", "危地马拉"),
    ("IQ", "Iraq", "伊拉克"),
    ("JO", "Jordan", "约旦"),
    ("KZ", "Kazakhstan", "哈萨克斯坦"),
    ("LB", "Lebanon", "黎巴嫩"),
    ("LY", "Libya", "利比亚"),
    ("MA", "Morocco", "摩洛哥"),
    ("ML", "Mali", "马里"),
    ("MM", "Myanmar", "缅甸"),
    ("NP", "Nepal", "尼泊尔"),
    ("KP", "North Korea", "朝鲜"),
    ("OM", "Oman", "阿曼"),
    ("PA", "Panama", "巴拿马"),
    ("PY", "Paraguay", "巴拉圭"),
    ("QA", "Qatar", "卡塔尔"),
    ("RS", "Serbia", "塞尔维亚"),
    ("LK", "Sri Lanka", "斯里兰卡"),
    ("SD", "Sudan", "苏丹"),
    ("SY", "Syria", "叙利亚"),
    ("TZ", "Tanzania", "坦桑尼亚"),
    ("TN", "Tunisia", "突尼斯"),
    ("UG", "Uganda", "乌干达"),
    ("UY", "Uruguay", "乌拉圭"),
    ("UZ", "Uzbekistan", "乌兹别克斯坦"),
    ("VE", "Venezuela", "委内瑞拉"),
    ("YE", "Yemen", "也门"),
    ("ZM", "Zambia", "赞比亚"),
    ("ZW", "Zimbabwe", "津巴布韦"),
    ("MN", "Mongolia", "蒙古"),
    ("LA", "Laos", "老挝"),
    ("HR", "Croatia", "克罗地亚"),
    ("BA", "Bosnia", "波黑"),
    ("SK", "Slovakia", "斯洛伐克"),
    ("SI", "Slovenia", "斯洛文尼亚"),
    ("EE", "Estonia", "爱沙尼亚"),
    ("LV", "Latvia", "拉脱维亚"),
    ("LT", "Lithuania", "立陶宛"),
    ("IS", "Iceland", "冰岛"),
    ("CY", "Cyprus", "塞浦路斯"),
    ("LU", "Luxembourg", "卢森堡"),
    ("MT", "Malta", "马耳他"),
    ("MC", "Monaco", "摩纳哥"),
    ("NA", "Namibia", "纳米比亚"),
    ("GL", "Greenland", "格陵兰岛"),
    ("AG", "Antigua and Barbuda", "安提瓜和巴布达"),
    ("AD", "Andorra", "安道尔"),
    ("AM", "Armenia", "亚美尼亚"),
    ("BS", "Bahamas", "巴哈马"),
    ("BH", "Bahrain", "巴林"),
    ("BB", "Barbados", "巴巴多斯"),
    ("BJ", "Benin", "贝宁"),
    ("BT", "Bhutan", "不丹"),
    ("BW", "Botswana", "博茨瓦纳"),
    ("BN", "Brunei", "文莱"),
    ("BF", "Burkina Faso", "布基纳法索"),
    ("BI", "Burundi", "布隆迪"),
    ("CG", "Congo", "刚果共和国"),
    ("CR", "Costa Rica", "哥斯达黎加"),
    ("DJ", "Djibouti", "吉布提"),
    ("DO", "Dominican Republic", "多米尼加"),
    ("SV", "El Salvador", "萨尔瓦多"),
    ("GQ", "Equatorial Guinea", "赤道几内亚"),
    ("ER", "Eritrea", "厄立特里亚"),
    ("FJ", "Fiji", "斐济"),
    ("GA", "Gabon", "加蓬"),
    ("GM", "Gambia", "冈比亚"),
    ("GE", "Georgia", "格鲁吉亚"),
    ("GY", "Guyana", "圭亚那"),
    ("HN", "Honduras", "洪都拉斯"),
    ("JM", "Jamaica", "牙买加"),
    ("KW", "Kuwait", "科威特"),
    ("KG", "Kyrgyzstan", "吉尔吉斯斯坦"),
    ("LS", "Lesotho", "莱索托"),
    ("LR", "Liberia", "利比里亚"),
    ("MG", "Madagascar", "马达加斯加"),
    ("MW", "Malawi", "马拉维"),
    ("MU", "Mauritius", "毛里求斯"),
    ("MR", "Mauritania", "毛里塔尼亚"),
    ("MD", "Moldova", "摩尔多瓦"),
    ("ME", "Montenegro", "黑山"),
    ("MZ", "Mozambique", "莫桑比克"),
    ("NI", "Nicaragua", "尼加拉瓜"),
    ("NE", "Niger", "尼日尔"),
    ("PG", "Papua New Guinea", "巴布亚新几内亚"),
    ("RW", "Rwanda", "卢旺达"),
    ("SL", "Sierra Leone", "塞拉利昂"),
    ("SO", "Somalia", "索马里"),
    ("SN", "Senegal", "塞内加尔"),
    ("SR", "Suriname", "苏里南"),
    ("SZ", "Eswatini", "斯威士兰"),
    ("TJ", "Tajikistan", "塔吉克斯坦"),
    ("TG", "Togo", "多哥"),
    ("TT", "Trinidad and Tobago", "特立尼达和多巴哥"),
    ("TM", "Turkmenistan", "土库曼斯坦"),
    ("SS", "South Sudan", "南苏丹"),
    ("CI", "Côte d'Ivoire", "科特迪瓦"),
    ("HT", "Haiti", "海地"),
    ("PR", "Puerto Rico", "波多黎各"),
    ("TW", "Taiwan, China", "中国台湾"),
];

/// ISO 3166-1 numeric → alpha-2, for map geometry sources keyed by numeric id.
const NUMERIC_ALPHA2: &[(&str, &str)] = &[
    ("004", "AF"),
    ("008", "AL"),
    ("012", "DZ"),
    ("020", "AD"),
    ("024", "AO"),
    ("028", "AG"),
    ("032", "AR"),
    ("051", "AM"),
    ("036", "AU"),
    ("040", "AT"),
    ("031", "AZ"),
    ("044", "BS"),
    ("048", "BH"),
    ("050", "BD"),
    ("052", "BB"),
    ("112", "BY"),
    ("056", "BE"),
    ("084", "BZ"),
    ("204", "BJ"),
    ("064", "BT"),
    ("068", "BO"),
    ("070", "BA"),
    ("072", "BW"),
    ("076", "BR"),
    ("096", "BN"),
    ("100", "BG"),
    ("854", "BF"),
    ("108", "BI"),
    ("116", "KH"),
    ("120", "CM"),
    ("124", "CA"),
    ("140", "CF"),
    ("148", "TD"),
    ("152", "CL"),
    ("156", "CN"),
    ("170", "CO"),
    ("178", "CG"),
    ("180", "CD"),
    ("188", "CR"),
    ("191", "HR"),
    ("192", "CU"),
    ("196", "CY"),
    ("203", "CZ"),
    ("208", "DK"),
    ("262", "DJ"),
    ("214", "DO"),
    ("218", "EC"),
    ("818", "EG"),
    ("222", "SV"),
    ("226", "GQ"),
    ("232", "ER"),
    ("233", "EE"),
    ("231", "ET"),
    ("242", "FJ"),
    ("246", "FI"),
    ("250", "FR"),
    ("266", "GA"),
    ("270", "GM"),
    ("268", "GE"),
    ("276", "DE"),
    ("288", "GH"),
    ("300", "GR"),
    ("320", "GT"),
    ("324", "GN"),
    ("328", "GY"),
    ("332", "HT"),
    ("340", "HN"),
    ("348", "HU"),
    ("352", "IS"),
    ("356", "IN"),
    ("360", "ID"),
    ("364", "IR"),
    ("368", "IQ"),
    ("372", "IE"),
    ("376", "IL"),
    ("380", "IT"),
    ("384", "CI"),
    ("388", "JM"),
    ("392", "JP"),
    ("400", "JO"),
    ("398", "KZ"),
    ("404", "KE"),
    ("408", "KP"),
    ("410", "KR"),
    ("414", "KW"),
    ("417", "KG"),
    ("418", "LA"),
    ("428", "LV"),
    ("422", "LB"),
    ("426", "LS"),
    ("430", "LR"),
    ("434", "LY"),
    ("440", "LT"),
    ("442", "LU"),
    ("807", "MK"),
    ("450", "MG"),
    ("454", "MW"),
    ("458", "MY"),
    ("466", "ML"),
    ("478", "MR"),
    ("480", "MU"),
    ("484", "MX"),
    ("498", "MD"),
    ("496", "MN"),
    ("499", "ME"),
    ("504", "MA"),
    ("508", "MZ"),
    ("104", "MM"),
    ("516", "NA"),
    ("524", "NP"),
    ("528", "NL"),
    ("554", "NZ"),
    ("558", "NI"),
    ("562", "NE"),
    ("566", "NG"),
    ("578", "NO"),
    ("512", "OM"),
    ("586", "PK"),
    ("591", "PA"),
    ("598", "PG"),
    ("304", "GL"),
    ("600", "PY"),
    ("604", "PE"),
    ("608", "PH"),
    ("616", "PL"),
    ("620", "PT"),
    ("634", "QA"),
    ("642", "RO"),
    ("643", "RU"),
    ("646", "RW"),
    ("682", "SA"),
    ("686", "SN"),
    ("688", "RS"),
    ("694", "SL"),
    ("702", "SG"),
    ("703", "SK"),
    ("705", "SI"),
    ("706", "SO"),
    ("710", "ZA"),
    ("724", "ES"),
    ("144", "LK"),
    ("736", "SD"),
    ("740", "SR"),
    ("748", "SZ"),
    ("752", "SE"),
    ("756", "CH"),
    ("760", "SY"),
    // 158 is charted separately in some geometry sources; map it with 156.
    ("158", "CN"),
    ("762", "TJ"),
    ("834", "TZ"),
    ("764", "TH"),
    ("768", "TG"),
    ("780", "TT"),
    ("788", "TN"),
    ("792", "TR"),
    ("795", "TM"),
    ("800", "UG"),
    ("804", "UA"),
    ("784", "AE"),
    ("826", "GB"),
    ("840", "US"),
    ("858", "UY"),
    ("860", "UZ"),
    ("862", "VE"),
    ("704", "VN"),
    ("887", "YE"),
    ("894", "ZM"),
    ("716", "ZW"),
    ("729", "SS"),
    ("728", "SS"),
];

fn anchor_index() -> &'static FxHashMap<&'static str, MapPoint> {
    static INDEX: OnceLock<FxHashMap<&'static str, MapPoint>> = OnceLock::new();
    INDEX.get_or_init(|| {
        COUNTRY_ANCHORS
            .iter()
            .map(|&(code, lon, lat)| (code, map_point(lon, lat)))
            .collect()
    })
}

fn name_index() -> &'static FxHashMap<&'static str, (&'static str, &'static str)> {
    static INDEX: OnceLock<FxHashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();
    INDEX.get_or_init(|| {
        COUNTRY_NAMES
            .iter()
            .map(|&(code, en, zh)| (code, (en, zh)))
            .collect()
    })
}

fn numeric_index() -> &'static FxHashMap<&'static str, &'static str> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| NUMERIC_ALPHA2.iter().copied().collect())
}

/// Looks up a country's fixed map anchor. Codes are matched case-insensitively.
pub fn anchor(code: &str) -> Option<MapPoint> {
    let code = code.to_ascii_uppercase();
    anchor_index().get(code.as_str()).copied()
}

/// Number of countries with a map anchor.
pub fn anchor_count() -> usize {
    COUNTRY_ANCHORS.len()
}

/// Codes of every country with a map anchor, in table order.
pub fn anchored_codes() -> impl Iterator<Item = &'static str> {
    COUNTRY_ANCHORS.iter().map(|&(code, _, _)| code)
}

/// Looks up a country's display name in the requested language.
pub fn name(code: &str, lang: Lang) -> Option<&'static str> {
    let code = code.to_ascii_uppercase();
    name_index().get(code.as_str()).map(|&(en, zh)| match lang {
        Lang::En => en,
        Lang::Zh => zh,
    })
}

/// Display name with the code itself as a fallback for unmapped countries.
pub fn name_or_code<'a>(code: &'a str, lang: Lang) -> &'a str {
    name(code, lang).unwrap_or(code)
}

/// Resolves an ISO 3166-1 numeric id (e.g. `"076"`, or unpadded `"76"`)
/// to its alpha-2 code.
pub fn alpha2_from_numeric(numeric: &str) -> Option<&'static str> {
    let digits = numeric.trim();
    let padded;
    let key = if digits.len() < 3 {
        padded = format!("{digits:0>3}");
        padded.as_str()
    } else {
        digits
    };
    numeric_index().get(key).copied()
}

/// Regional-indicator flag emoji for an alpha-2 code.
pub fn flag_emoji(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() != 2 {
        return None;
    }
    let mut out = String::with_capacity(8);
    for ch in code.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let base = ch.to_ascii_uppercase() as u32 - 'A' as u32;
        out.push(char::from_u32(0x1F1E6 + base)?);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_case_insensitively() {
        let cn = anchor("CN").expect("CN anchor");
        assert_eq!((cn.x, cn.y), (104.0, 35.0));
        assert_eq!(anchor("cn"), anchor("CN"));
        assert!(anchor("XX").is_none());
    }

    #[test]
    fn anchor_table_has_no_duplicate_coordinates() {
        // Placement identifies a cluster's own anchor by coordinate; two
        // countries sharing an anchor would merge their label zones.
        for (i, &(_, lon_a, lat_a)) in COUNTRY_ANCHORS.iter().enumerate() {
            for &(_, lon_b, lat_b) in &COUNTRY_ANCHORS[i + 1..] {
                assert!(lon_a != lon_b || lat_a != lat_b);
            }
        }
    }

    #[test]
    fn names_cover_both_languages() {
        assert_eq!(name("fr", Lang::En), Some("France"));
        assert_eq!(name("FR", Lang::Zh), Some("法国"));
        assert_eq!(name_or_code("ZZ", Lang::En), "ZZ");
    }

    #[test]
    fn numeric_codes_resolve_with_and_without_padding() {
        assert_eq!(alpha2_from_numeric("076"), Some("BR"));
        assert_eq!(alpha2_from_numeric("76"), Some("BR"));
        assert_eq!(alpha2_from_numeric("4"), Some("AF"));
        assert_eq!(alpha2_from_numeric("999"), None);
    }

    #[test]
    fn flags_are_regional_indicator_pairs() {
        assert_eq!(flag_emoji("JP").as_deref(), Some("🇯🇵"));
        assert_eq!(flag_emoji("j p"), None);
        assert_eq!(flag_emoji("JPN"), None);
    }
}
