//! Static rule tables driving category inference and tag extraction.
//!
//! The rule lists are ordered and the order is part of the behavior: category
//! rules are first-match-wins over overlapping vocabulary, so reordering them
//! silently changes the classification of ambiguous names.

use super::FontCategory;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("invalid built-in rule pattern")
}

/// Rule tables for category inference.
pub struct CategoryRules {
    /// Source-site category label -> category, keys normalized (lowercase, trimmed).
    pub source_map: HashMap<&'static str, FontCategory>,
    /// Ordered first-match-wins rules over the combined name + description text.
    pub text_rules: Vec<(Regex, FontCategory)>,
    /// Category assigned when nothing matches.
    pub fallback: FontCategory,
}

/// Rule tables for tag extraction.
pub struct TagRules {
    /// Ordered rules over the combined text; every matching rule contributes.
    pub text_rules: Vec<(Regex, Vec<&'static str>)>,
    /// Extra tags keyed by normalized source-site category label.
    pub category_extra: HashMap<&'static str, Vec<&'static str>>,
    /// Per-category default tags, used when nothing else matched.
    pub fallback: HashMap<FontCategory, Vec<&'static str>>,
    /// Catch-all default when the category has no fallback entry.
    pub fallback_default: Vec<&'static str>,
}

impl CategoryRules {
    /// The built-in tables for the Japanese free-font crawl.
    pub fn builtin() -> CategoryRules {
        use FontCategory::*;
        let source_map = HashMap::from([
            ("kakugo", Sans),
            ("gothic", Sans),
            ("sans", Sans),
            ("mincho", Serif),
            ("serif", Serif),
            ("marugo", Sans),
            ("round", Sans),
            ("tegaki", Handwriting),
            ("handwriting", Handwriting),
            ("script", Handwriting),
            ("fude", Handwriting),
            ("brush", Handwriting),
            ("kawaii", Display),
            ("pop", Display),
            ("design", Display),
            ("display", Display),
            ("pixel", Display),
            ("dot", Display),
            ("horror", Display),
            ("monospace", Monospace),
        ]);
        let text_rules = vec![
            (pattern(r"(?i)ゴシック|gothic|ゴチック|角"), Sans),
            (pattern(r"(?i)明朝|mincho|serif"), Serif),
            (pattern(r"(?i)丸|まる|round|maru|ラウンド"), Sans),
            (pattern(r"(?i)手書|tegaki|handwrit|script|手書き"), Handwriting),
            (pattern(r"(?i)筆|fude|brush|毛筆|楷書|行書|草書"), Handwriting),
            (pattern(r"(?i)ポップ|pop|kawaii|かわいい"), Display),
            (pattern(r"(?i)ドット|dot|pixel|ピクセル|レトロ"), Display),
            (pattern(r"(?i)デザイン|display|装飾|ファンシー|fancy"), Display),
            (pattern(r"(?i)等幅|mono|コード|code"), Monospace),
        ];
        CategoryRules {
            source_map,
            text_rules,
            fallback: Display,
        }
    }
}

impl TagRules {
    /// The built-in tables for the Japanese free-font crawl.
    pub fn builtin() -> TagRules {
        use FontCategory::*;
        let text_rules = vec![
            (pattern(r"(?i)手書き|カジュアル|手書"), vec!["手書き風", "カジュアル"]),
            (pattern(r"(?i)ポップ|楽しい|fun|pop|ポップ体"), vec!["ポップ"]),
            (pattern(r"(?i)レトロ|昭和|vintage|retro|懐かし"), vec!["レトロ"]),
            (
                pattern(r"(?i)かわいい|可愛い|cute|kawaii|丸み|丸い|ラウンド"),
                vec!["かわいい"],
            ),
            (
                pattern(r"(?i)力強い|太い|極太|bold|heavy|ウェイト|力強|インパクト"),
                vec!["力強い", "インパクト"],
            ),
            (
                pattern(r"(?i)エレガント|上品|elegant|優雅|美し"),
                vec!["エレガント", "高級"],
            ),
            (
                pattern(r"(?i)ホラー|恐怖|horror|怖い|おどろおどろ"),
                vec!["クール", "デザイン"],
            ),
            (
                pattern(r"(?i)モダン|modern|スタイリッシュ|stylish|洗練"),
                vec!["モダン"],
            ),
            (
                pattern(r"(?i)フォーマル|formal|ビジネス|business|公式"),
                vec!["フォーマル", "ビジネス"],
            ),
            (
                pattern(r"(?i)ナチュラル|natural|自然|organic|やさし|優し"),
                vec!["ナチュラル"],
            ),
            (pattern(r"(?i)クール|cool|シャープ|sharp|鋭い"), vec!["クール"]),
            (
                pattern(r"(?i)テクノ|tech|digital|デジタル|未来|futur"),
                vec!["テクノ"],
            ),
            (
                pattern(r"(?i)読みやすい|legible|readable|視認|ユニバーサル|UD"),
                vec!["読みやすい"],
            ),
            (pattern(r"(?i)細[字い]|thin|light|細め|ライト"), vec!["細字"]),
            (
                pattern(r"(?i)太字|bold|heavy|太め|ヘビー|ブラック|black"),
                vec!["太字"],
            ),
            (
                pattern(r"(?i)ニュース|news|速報|テロップ|telop"),
                vec!["ニュース"],
            ),
            (
                pattern(r"(?i)デザイン|design|装飾|decorat|アート|art"),
                vec!["デザイン"],
            ),
        ];
        let category_extra = HashMap::from([
            ("kawaii", vec!["かわいい", "ポップ"]),
            ("pop", vec!["ポップ", "カジュアル"]),
            ("marugo", vec!["かわいい"]),
            ("round", vec!["かわいい"]),
            ("fude", vec!["力強い"]),
            ("brush", vec!["力強い"]),
            ("tegaki", vec!["手書き風", "カジュアル"]),
            ("handwriting", vec!["手書き風"]),
            ("horror", vec!["クール", "デザイン"]),
            ("pixel", vec!["レトロ", "テクノ"]),
            ("dot", vec!["レトロ", "テクノ"]),
        ]);
        let fallback = HashMap::from([
            (Sans, vec!["読みやすい", "モダン"]),
            (Serif, vec!["エレガント", "フォーマル"]),
            (Display, vec!["デザイン", "インパクト"]),
            (Handwriting, vec!["手書き風", "カジュアル"]),
            (Monospace, vec!["テクノ", "モダン"]),
        ]);
        TagRules {
            text_rules,
            category_extra,
            fallback,
            fallback_default: vec!["デザイン"],
        }
    }
}

lazy_static! {
    /// Process-wide category rule tables.
    pub static ref CATEGORY_RULES: CategoryRules = CategoryRules::builtin();
    /// Process-wide tag rule tables.
    pub static ref TAG_RULES: TagRules = TagRules::builtin();
}
