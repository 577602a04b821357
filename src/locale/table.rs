//! Table statique des locales

/// Locale des codes inconnus et de `auto`
pub const DEFAULT_LOCALE: &str = "es-ES";

/// Code de traduction → locale vocale, trié par code
pub const LOCALES: &[(&str, &str)] = &[
    ("af", "af-ZA"),
    ("am", "am-ET"),
    ("ar", "ar-SA"),
    ("auto", DEFAULT_LOCALE),
    ("az", "az-AZ"),
    ("bg", "bg-BG"),
    ("bn", "bn-IN"),
    ("bs", "bs-BA"),
    ("ca", "ca-ES"),
    ("ceb", "ceb-PH"),
    ("cs", "cs-CZ"),
    ("cy", "cy-GB"),
    ("da", "da-DK"),
    ("de", "de-DE"),
    ("el", "el-GR"),
    ("en", "en-US"),
    ("eo", "eo"),
    ("es", "es-ES"),
    ("et", "et-EE"),
    ("eu", "eu-ES"),
    ("fa", "fa-IR"),
    ("fi", "fi-FI"),
    ("fr", "fr-FR"),
    ("ga", "ga-IE"),
    ("gd", "gd-GB"),
    ("gl", "gl-ES"),
    ("gu", "gu-IN"),
    ("ha", "ha-NG"),
    ("he", "he-IL"),
    ("hi", "hi-IN"),
    ("hmn", "hmn"),
    ("hr", "hr-HR"),
    ("ht", "ht-HT"),
    ("hu", "hu-HU"),
    ("hy", "hy-AM"),
    ("id", "id-ID"),
    ("ig", "ig-NG"),
    ("is", "is-IS"),
    ("it", "it-IT"),
    ("ja", "ja-JP"),
    ("jw", "jv-ID"),
    ("ka", "ka-GE"),
    ("kk", "kk-KZ"),
    ("km", "km-KH"),
    ("kn", "kn-IN"),
    ("ko", "ko-KR"),
    ("la", "la"),
    ("lo", "lo-LA"),
    ("lt", "lt-LT"),
    ("lv", "lv-LV"),
    ("mg", "mg-MG"),
    ("mi", "mi-NZ"),
    ("mk", "mk-MK"),
    ("ml", "ml-IN"),
    ("mn", "mn-MN"),
    ("mr", "mr-IN"),
    ("ms", "ms-MY"),
    ("mt", "mt-MT"),
    ("ne", "ne-NP"),
    ("nl", "nl-NL"),
    ("no", "no-NO"),
    ("ny", "ny-MW"),
    ("or", "or-IN"),
    ("pa", "pa-IN"),
    ("pl", "pl-PL"),
    ("ps", "ps-AF"),
    ("pt", "pt-PT"),
    ("ro", "ro-RO"),
    ("ru", "ru-RU"),
    ("sd", "sd-PK"),
    ("si", "si-LK"),
    ("sk", "sk-SK"),
    ("sl", "sl-SI"),
    ("sm", "sm-WS"),
    ("sn", "sn-ZW"),
    ("so", "so-SO"),
    ("sq", "sq-AL"),
    ("sr", "sr-RS"),
    ("st", "st-LS"),
    ("su", "su-ID"),
    ("sv", "sv-SE"),
    ("sw", "sw-KE"),
    ("ta", "ta-IN"),
    ("te", "te-IN"),
    ("tg", "tg-TJ"),
    ("th", "th-TH"),
    ("tl", "fil-PH"),
    ("tr", "tr-TR"),
    ("tt", "tt-RU"),
    ("uk", "uk-UA"),
    ("ur", "ur-PK"),
    ("uz", "uz-UZ"),
    ("vi", "vi-VN"),
    ("xh", "xh-ZA"),
    ("yi", "yi"),
    ("yo", "yo-NG"),
    ("zh-CN", "zh-CN"),
    ("zh-TW", "zh-TW"),
    ("zu", "zu-ZA"),
];

fn lookup(code: &str) -> Option<&'static str> {
    LOCALES
        .binary_search_by(|(key, _)| (*key).cmp(code))
        .ok()
        .map(|idx| LOCALES[idx].1)
}

/// Retourne la locale vocale d'un code de traduction
///
/// N'échoue jamais: un code inconnu donne [`DEFAULT_LOCALE`].
pub fn resolve_locale(code: &str) -> &'static str {
    lookup(code).unwrap_or(DEFAULT_LOCALE)
}

/// Vrai si le code figure dans la table
pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}
