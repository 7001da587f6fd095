// libshuangpin/src/syllables.rs
//
// Mandarin syllable inventory and initial/final decomposition.
//
// Decomposition is table-driven: a syllable is split at the longest
// initial from `INITIALS` that prefixes it. `y` and `w` are treated as
// initials because every shuangpin scheme assigns them their own key.

/// Pinyin initials, two-letter initials first so they win over `z`/`c`/`s`.
pub const INITIALS: &[&str] = &[
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

/// Toneless pinyin syllables of standard Mandarin, `ü` spelled `v`.
pub const PINYIN_SYLLABLES: &[&str] = &[
    "a", "ai", "an", "ang", "ao", "ba", "bai", "ban", "bang", "bao", "bei", "ben", "beng", "bi",
    "bian", "biao", "bie", "bin", "bing", "bo", "bu", "ca", "cai", "can", "cang", "cao", "ce",
    "cen", "ceng", "cha", "chai", "chan", "chang", "chao", "che", "chen", "cheng", "chi", "chong",
    "chou", "chu", "chuai", "chuan", "chuang", "chui", "chun", "chuo", "ci", "cong", "cou", "cu",
    "cuan", "cui", "cun", "cuo", "da", "dai", "dan", "dang", "dao", "de", "dei", "deng", "di",
    "dia", "dian", "diao", "die", "ding", "diu", "dong", "dou", "du", "duan", "dui", "dun", "duo",
    "e", "ei", "en", "er", "fa", "fan", "fang", "fei", "fen", "feng", "fo", "fou", "fu", "ga",
    "gai", "gan", "gang", "gao", "ge", "gei", "gen", "geng", "gong", "gou", "gu", "gua", "guai",
    "guan", "guang", "gui", "gun", "guo", "ha", "hai", "han", "hang", "hao", "he", "hei", "hen",
    "heng", "hong", "hou", "hu", "hua", "huai", "huan", "huang", "hui", "hun", "huo", "ji", "jia",
    "jian", "jiang", "jiao", "jie", "jin", "jing", "jiong", "jiu", "ju", "juan", "jue", "jun",
    "ka", "kai", "kan", "kang", "kao", "ke", "ken", "keng", "kong", "kou", "ku", "kua", "kuai",
    "kuan", "kuang", "kui", "kun", "kuo", "la", "lai", "lan", "lang", "lao", "le", "lei", "leng",
    "li", "lia", "lian", "liang", "liao", "lie", "lin", "ling", "liu", "lo", "long", "lou", "lu",
    "luan", "lun", "luo", "lv", "lve", "ma", "mai", "man", "mang", "mao", "me", "mei", "men",
    "meng", "mi", "mian", "miao", "mie", "min", "ming", "miu", "mo", "mou", "mu", "na", "nai",
    "nan", "nang", "nao", "ne", "nei", "nen", "neng", "ng", "ni", "nian", "niang", "niao", "nie",
    "nin", "ning", "niu", "nong", "nou", "nu", "nuan", "nuo", "nv", "nve", "o", "ou", "pa", "pai",
    "pan", "pang", "pao", "pei", "pen", "peng", "pi", "pian", "piao", "pie", "pin", "ping", "po",
    "pou", "pu", "qi", "qia", "qian", "qiang", "qiao", "qie", "qin", "qing", "qiong", "qiu", "qu",
    "quan", "que", "qun", "ran", "rang", "rao", "re", "ren", "reng", "ri", "rong", "rou", "ru",
    "ruan", "rui", "run", "ruo", "sa", "sai", "san", "sang", "sao", "se", "sen", "seng", "sha",
    "shai", "shan", "shang", "shao", "she", "shei", "shen", "sheng", "shi", "shou", "shu", "shua",
    "shuai", "shuan", "shuang", "shui", "shun", "shuo", "si", "song", "sou", "su", "suan", "sui",
    "sun", "suo", "ta", "tai", "tan", "tang", "tao", "te", "teng", "ti", "tian", "tiao", "tie",
    "ting", "tong", "tou", "tu", "tuan", "tui", "tun", "tuo", "wa", "wai", "wan", "wang", "wei",
    "wen", "weng", "wo", "wu", "xi", "xia", "xian", "xiang", "xiao", "xie", "xin", "xing", "xiong",
    "xiu", "xu", "xuan", "xue", "xun", "ya", "yan", "yang", "yao", "ye", "yi", "yin", "ying", "yo",
    "yong", "you", "yu", "yuan", "yue", "yun", "za", "zai", "zan", "zang", "zao", "ze", "zei",
    "zen", "zeng", "zha", "zhai", "zhan", "zhang", "zhao", "zhe", "zhen", "zheng", "zhi", "zhong",
    "zhou", "zhu", "zhua", "zhuai", "zhuan", "zhuang", "zhui", "zhun", "zhuo", "zi", "zong", "zou",
    "zu", "zuan", "zui", "zun", "zuo",
];

/// Split a toneless syllable into `(initial, final)`.
///
/// Zero-initial syllables return an empty initial. Interjections such as
/// `ng` or `m` split into an initial and a final that is not a real final
/// (`"g"`, `""`); callers are expected to treat those as lookup misses.
pub fn split_syllable(syllable: &str) -> (&str, &str) {
    INITIALS
        .iter()
        .find(|init| syllable.starts_with(*init))
        .map(|init| syllable.split_at(init.len()))
        .unwrap_or(("", syllable))
}

/// Canonical spelling used throughout the crate: lower-case ASCII with
/// `ü` written as `v` (`lü` and `lu:` both become `lv`).
pub fn normalize_syllable(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace("u:", "v")
        .replace('ü', "v")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_is_sorted_for_binary_search() {
        assert!(PINYIN_SYLLABLES.windows(2).all(|w| w[0] < w[1]));
        assert!(PINYIN_SYLLABLES.binary_search(&"zhuang").is_ok());
        assert!(PINYIN_SYLLABLES.binary_search(&"zhuangg").is_err());
    }

    #[test]
    fn splits_retroflex_initials_whole() {
        assert_eq!(split_syllable("zhang"), ("zh", "ang"));
        assert_eq!(split_syllable("chi"), ("ch", "i"));
        assert_eq!(split_syllable("shuang"), ("sh", "uang"));
        assert_eq!(split_syllable("zi"), ("z", "i"));
        assert_eq!(split_syllable("sang"), ("s", "ang"));
    }

    #[test]
    fn splits_plain_initials_and_glides() {
        assert_eq!(split_syllable("hao"), ("h", "ao"));
        assert_eq!(split_syllable("nv"), ("n", "v"));
        assert_eq!(split_syllable("yuan"), ("y", "uan"));
        assert_eq!(split_syllable("weng"), ("w", "eng"));
    }

    #[test]
    fn zero_initial_keeps_whole_syllable_as_final() {
        assert_eq!(split_syllable("a"), ("", "a"));
        assert_eq!(split_syllable("er"), ("", "er"));
        assert_eq!(split_syllable("ang"), ("", "ang"));
    }

    #[test]
    fn interjections_split_into_odd_finals() {
        assert_eq!(split_syllable("ng"), ("n", "g"));
        assert_eq!(split_syllable("m"), ("m", ""));
    }

    #[test]
    fn normalizes_umlaut_spellings() {
        assert_eq!(normalize_syllable("lü"), "lv");
        assert_eq!(normalize_syllable("NU:E"), "nve");
        assert_eq!(normalize_syllable(" hao "), "hao");
    }
}
