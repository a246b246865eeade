//! Integration tests for the doc-translator library
//!
//! These tests exercise the shipped language tables through the public API:
//! every key in every language, list and word rendering, wording switches,
//! fallback and the active translator.

use chrono::NaiveDate;
use doc_translator::config::Config;
use doc_translator::i18n::{
    self, CompoundKind, FormatParams, Language, LanguageRegistry, LanguageTable, MessageKey,
    TranslationMetrics, Translator,
};
use serial_test::serial;

// ==================== Test Helpers ====================

/// Parameters supplying every argument any message takes.
fn full_params() -> FormatParams {
    FormatParams::new()
        .name("QWidget")
        .project("Qt")
        .date("2026-01-05")
        .members("functions")
        .what("QWidget")
        .format("svg")
        .number("3")
        .count(2)
}

fn english() -> Translator {
    Translator::english().expect("English table should load")
}

fn all_translators() -> Vec<Translator> {
    LanguageRegistry::get()
        .list_all()
        .into_iter()
        .map(|config| Translator::for_id(config.id).expect("Embedded table should load"))
        .collect()
}

// ==================== Completeness Tests ====================

#[test]
fn test_every_key_localizes_in_every_language() {
    let params = full_params();
    let when = NaiveDate::from_ymd_opt(2026, 1, 5)
        .unwrap()
        .and_hms_opt(14, 3, 9)
        .unwrap();

    for translator in all_translators() {
        for key in MessageKey::ALL.iter().copied() {
            let text = if key == MessageKey::DateTime {
                translator.date_time(when, true)
            } else {
                translator.localize(key, &params)
            };
            let text = text.unwrap_or_else(|e| panic!("{} {}: {}", translator.id_language(), key, e));
            assert!(!text.is_empty(), "{} {} is empty", translator.id_language(), key);
        }
    }
}

#[test]
fn test_every_select_variant_localizes() {
    // Flags combined with each compound kind reach every branch shape
    let flag_sets = [
        FormatParams::new(),
        FormatParams::new().optimize_c(true),
        FormatParams::new().extract_all(true).optimize_c(true),
        FormatParams::new().singular(true).first_capital(true),
        FormatParams::new().single(true).template(true).enable(true),
    ];

    for translator in all_translators() {
        for flags in &flag_sets {
            for kind in CompoundKind::NAMED.iter().copied().chain([CompoundKind::Other]) {
                let params = flags
                    .clone()
                    .compound(kind)
                    .name("T")
                    .date("d")
                    .members("m")
                    .what("w")
                    .format("png")
                    .number("1")
                    .count(3);
                for key in MessageKey::ALL.iter().copied() {
                    if key == MessageKey::DateTime {
                        continue;
                    }
                    assert!(
                        translator.localize(key, &params).is_ok(),
                        "{} {} with {:?}",
                        translator.id_language(),
                        key,
                        params
                    );
                }
            }
        }
    }
}

#[test]
fn test_id_language_matches_registry_for_all() {
    for config in LanguageRegistry::get().list_all() {
        let translator = Translator::for_id(config.id).unwrap();
        assert_eq!(translator.id_language(), config.id);
    }
}

// ==================== List Tests ====================

#[test]
fn test_write_list_small_counts() {
    for translator in all_translators() {
        assert_eq!(translator.write_list(0), "");
        assert_eq!(translator.write_list(1), "@0");
    }
}

#[test]
fn test_write_list_pair_has_single_conjunction() {
    let list = english().write_list(2);
    assert_eq!(list, "@0 and @1");
    assert!(!list.contains(','));
    assert_eq!(list.matches(" and ").count(), 1);
}

#[test]
fn test_write_list_five() {
    let list = english().write_list(5);
    assert_eq!(list, "@0, @1, @2, @3, and @4");

    let positions: Vec<usize> = (0..5)
        .map(|i| list.find(&format!("@{}", i)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_conjunctions_per_language() {
    let cases = [
        (Language::GERMAN, "@0, @1 und @2"),
        (Language::FRENCH, "@0, @1, et @2"),
        (Language::ITALIAN, "@0, @1, e @2"),
        (Language::RUSSIAN, "@0, @1 и @2"),
    ];
    for (language, expected) in cases {
        let translator = Translator::new(language).unwrap();
        assert_eq!(translator.write_list(3), expected, "{}", language);
    }
}

#[test]
fn test_inherits_list_examples() {
    let t = english();
    assert_eq!(t.list(MessageKey::InheritsList, 3).unwrap(), "Inherits @0, @1, and @2.");
    assert_eq!(t.list(MessageKey::InheritsList, 1).unwrap(), "Inherits @0.");
    assert_eq!(t.list(MessageKey::InheritsList, 0).unwrap(), "Inherits .");
}

#[test]
fn test_list_keys_in_other_languages() {
    let german = Translator::new(Language::GERMAN).unwrap();
    assert_eq!(german.list(MessageKey::InheritsList, 2).unwrap(), "Erbt @0 und @1.");

    let french = Translator::new(Language::FRENCH).unwrap();
    assert_eq!(french.list(MessageKey::InheritsList, 2).unwrap(), "Hérite @0, et @1.");
}

// ==================== Word Tests ====================

#[test]
fn test_word_grid_english() {
    let t = english();
    assert_eq!(t.word(MessageKey::Author, true, true).unwrap(), "Author");
    assert_eq!(t.word(MessageKey::Author, true, false).unwrap(), "Authors");
    assert_eq!(t.word(MessageKey::Author, false, true).unwrap(), "author");
    assert_eq!(t.word(MessageKey::Author, false, false).unwrap(), "authors");
}

#[test]
fn test_plural_shares_singular_stem() {
    let t = english();
    for key in MessageKey::ALL.iter().copied().filter(MessageKey::is_word) {
        let singular = t.word(key, false, true).unwrap();
        let plural = t.word(key, false, false).unwrap();
        let stem = &singular[..singular.len() - 1];
        assert!(plural.starts_with(stem), "{}: {} / {}", key, singular, plural);
        assert_ne!(singular, plural, "{}", key);
    }
}

#[test]
fn test_inflecting_languages_distinguish_number() {
    for translator in all_translators() {
        if [Language::JAPANESE, Language::VIETNAMESE].contains(&translator.language()) {
            continue;
        }
        for key in [MessageKey::Class, MessageKey::Group, MessageKey::Page, MessageKey::Member] {
            let singular = translator.word(key, false, true).unwrap();
            let plural = translator.word(key, false, false).unwrap();
            assert_ne!(singular, plural, "{} {}", translator.id_language(), key);
        }
    }
}

#[test]
fn test_nouns_per_language() {
    // (language, key, singular, plural) with first_capital set
    let cases = [
        (Language::GERMAN, MessageKey::Class, "Klasse", "Klassen"),
        (Language::GERMAN, MessageKey::File, "Datei", "Dateien"),
        (Language::GERMAN, MessageKey::Module, "Modul", "Module"),
        (Language::GERMAN, MessageKey::Group, "Gruppe", "Gruppen"),
        (Language::SPANISH, MessageKey::File, "Archivo", "Archivos"),
        (Language::FRENCH, MessageKey::File, "Fichier", "Fichiers"),
        (Language::ITALIAN, MessageKey::Class, "Classe", "Classi"),
        (Language::DUTCH, MessageKey::Class, "Klasse", "Klassen"),
        (Language::POLISH, MessageKey::Group, "Grupa", "Grupy"),
        (Language::PORTUGUESE, MessageKey::Module, "Módulo", "Módulos"),
        (Language::RUSSIAN, MessageKey::Class, "Класс", "Классы"),
        (Language::CZECH, MessageKey::Class, "Třída", "Třídy"),
        (Language::LITHUANIAN, MessageKey::File, "Failas", "Failai"),
        (Language::SERBIAN_CYRILLIC, MessageKey::Class, "Класа", "Класе"),
    ];
    for (language, key, singular, plural) in cases {
        let t = Translator::new(language).unwrap();
        assert_eq!(t.word(key, true, true).unwrap(), singular, "{} {}", language, key);
        assert_eq!(t.word(key, true, false).unwrap(), plural, "{} {}", language, key);
    }

    // German nouns keep their capital even without first_capital
    let german = Translator::new(Language::GERMAN).unwrap();
    assert_eq!(german.word(MessageKey::Class, false, true).unwrap(), "Klasse");
}

#[test]
fn test_russian_words_are_translated() {
    let russian = Translator::new(Language::RUSSIAN).unwrap();
    assert_eq!(russian.text(MessageKey::Todo).unwrap(), "Необходимо сделать");
    assert_eq!(russian.text(MessageKey::RelatedPages).unwrap(), "Описания");
    assert_eq!(
        russian
            .localize(MessageKey::Class, &FormatParams::new().optimize_c(true))
            .unwrap(),
        "структуры данных"
    );
}

#[test]
fn test_first_capital_controls_first_char() {
    for translator in all_translators() {
        for key in MessageKey::ALL.iter().copied().filter(MessageKey::is_word) {
            let capital = translator.word(key, true, false).unwrap();
            let first = capital.chars().next().unwrap();
            assert!(
                !first.is_lowercase(),
                "{} {}: {}",
                translator.id_language(),
                key,
                capital
            );
        }
    }
}

// ==================== optimize_c Tests ====================

#[test]
fn test_optimize_c_changes_only_flagged_keys() {
    let t = english();
    let english_table = t.table();
    let plain = full_params();
    let c = full_params().optimize_c(true);

    for key in MessageKey::ALL.iter().copied() {
        if key == MessageKey::DateTime {
            continue;
        }
        let flagged = english_table
            .get(key)
            .map_or(false, |template| template.has_tag("optimize_c"));
        let a = t.localize(key, &plain).unwrap();
        let b = t.localize(key, &c).unwrap();

        if flagged {
            assert_ne!(a, b, "{} should change with optimize_c", key);
        } else {
            assert_eq!(a, b, "{} should not change with optimize_c", key);
        }
    }
}

// ==================== Compound Kind Tests ====================

#[test]
fn test_compound_reference_names_kind() {
    let t = english();
    let nouns = [
        (CompoundKind::Class, "Class"),
        (CompoundKind::Struct, "Struct"),
        (CompoundKind::Union, "Union"),
        (CompoundKind::Interface, "Interface"),
        (CompoundKind::Protocol, "Protocol"),
        (CompoundKind::Category, "Category"),
        (CompoundKind::Exception, "Exception"),
    ];
    for (kind, noun) in nouns {
        let title = t.compound_reference("Foo", kind, false).unwrap();
        assert_eq!(title, format!("Foo {} Reference", noun));

        let files = t.generated_from_files(kind, false).unwrap();
        assert!(files.contains(&noun.to_lowercase()), "{}", files);
    }
}

#[test]
fn test_compound_messages_are_translated_everywhere() {
    let keys = [
        MessageKey::CompoundReference,
        MessageKey::GeneratedFromFiles,
        MessageKey::LegendDocs,
        MessageKey::CompoundMembersDescription,
        MessageKey::FileMembersDescription,
        MessageKey::NamespaceMemberDescription,
    ];
    let english = english();

    for translator in all_translators() {
        for key in keys {
            assert!(
                translator.table().contains(key),
                "{} has no {}",
                translator.id_language(),
                key
            );
        }
        if translator.language() == Language::ENGLISH {
            continue;
        }

        let title = translator
            .compound_reference("QList", CompoundKind::Struct, true)
            .unwrap();
        assert_ne!(
            title,
            english.compound_reference("QList", CompoundKind::Struct, true).unwrap(),
            "{}",
            translator.id_language()
        );
        assert!(title.contains("QList"), "{}", title);
    }
}

#[test]
fn test_compound_reference_per_language() {
    let cases = [
        (Language::RUSSIAN, CompoundKind::Struct, true, "Шаблон структуры QList"),
        (Language::RUSSIAN, CompoundKind::Class, false, "Класс QList"),
        (Language::GERMAN, CompoundKind::Class, false, "QList Klassenreferenz"),
        (Language::CZECH, CompoundKind::Struct, false, "Dokumentace struktury QList"),
        (Language::POLISH, CompoundKind::Struct, true, "Dokumentacja szablonu struktury QList"),
        (Language::JAPANESE, CompoundKind::Struct, true, "QList 構造体テンプレート"),
    ];
    for (language, kind, template, expected) in cases {
        let t = Translator::new(language).unwrap();
        assert_eq!(t.compound_reference("QList", kind, template).unwrap(), expected);
    }

    let czech = Translator::new(Language::CZECH).unwrap();
    assert_eq!(
        czech.generated_from_files(CompoundKind::Union, false).unwrap(),
        "Dokumentace pro tuto unii (union) byla generována z následujících souborů:"
    );
    let russian = Translator::new(Language::RUSSIAN).unwrap();
    assert_eq!(
        russian.generated_from_files(CompoundKind::Class, true).unwrap(),
        "Объявления и описания членов класса находятся в файле:"
    );
}

#[test]
fn test_members_description_follows_flags_in_russian() {
    let russian = Translator::new(Language::RUSSIAN).unwrap();
    let plain = russian
        .localize(MessageKey::CompoundMembersDescription, &FormatParams::new())
        .unwrap();
    let c = russian
        .localize(
            MessageKey::CompoundMembersDescription,
            &FormatParams::new().optimize_c(true).extract_all(true),
        )
        .unwrap();
    assert!(plain.contains("документированных членов классов"), "{}", plain);
    assert!(c.contains("структур данных"), "{}", c);
    assert_ne!(plain, c);
}

#[test]
fn test_other_kind_does_not_fail() {
    for translator in all_translators() {
        assert!(translator
            .compound_reference("Foo", CompoundKind::Other, true)
            .is_ok());
        assert!(translator
            .generated_from_files(CompoundKind::Other, true)
            .is_ok());
    }
}

#[test]
fn test_kind_parses_from_name() {
    let kind: CompoundKind = "Exception".parse().unwrap();
    let title = english().compound_reference("E", kind, true).unwrap();
    assert_eq!(title, "E Exception Template Reference");
}

// ==================== Fallback Tests ====================

#[test]
fn test_italian_date_falls_back_to_english() {
    let italian = Translator::new(Language::ITALIAN).unwrap();
    let when = NaiveDate::from_ymd_opt(2026, 1, 5)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    assert_eq!(italian.date_time(when, false).unwrap(), "Mon Jan 5 2026");
}

#[test]
fn test_sparse_table_fallback_is_counted() {
    let table = LanguageTable::from_json(
        r#"{"language": "german", "messages": {"Todo": "Zu erledigen"}}"#,
    )
    .unwrap();
    let t = Translator::with_table(Language::GERMAN, table).unwrap();

    let before = TranslationMetrics::global().fallbacks();
    assert_eq!(t.text(MessageKey::Todo).unwrap(), "Zu erledigen");
    assert_eq!(t.text(MessageKey::Bug).unwrap(), "Bug");
    assert!(TranslationMetrics::global().fallbacks() > before);
}

#[test]
fn test_outdated_languages_report_update_needed() {
    for (language, since) in [
        (Language::VIETNAMESE, "release 1.6.0"),
        (Language::SERBIAN_CYRILLIC, "release 1.6.0"),
        (Language::LITHUANIAN, "release 1.4.6"),
        (Language::PERSIAN, "release 1.7.5"),
    ] {
        let message = Translator::new(language)
            .unwrap()
            .update_needed_message()
            .unwrap();
        assert!(message.contains(&format!("since {}.", since)), "{}", message);
        assert!(message.contains(language.id()));
    }
    assert!(Translator::new(Language::GERMAN)
        .unwrap()
        .update_needed_message()
        .is_none());
}

// ==================== Active Translator Tests ====================

#[test]
#[serial(active)]
fn test_select_language_live_switch() {
    assert!(i18n::select_language("german").unwrap());
    let german = i18n::active().unwrap();
    assert_eq!(german.write_list(2), "@0 und @1");

    assert!(i18n::select_language("Japanese").unwrap());
    assert_eq!(i18n::active().unwrap().id_language(), "japanese");

    // The translator taken before the switch is unaffected
    assert_eq!(german.id_language(), "german");

    assert!(!i18n::select_language("").unwrap());
    assert_eq!(i18n::active().unwrap().id_language(), "english");
}

#[test]
#[serial(active)]
fn test_active_translator_across_threads() {
    i18n::install(Translator::new(Language::SPANISH).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| i18n::active().unwrap().id_language()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "spanish");
    }

    i18n::install(english());
}

// ==================== Config Tests ====================

#[test]
fn test_config_override_table() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("french.json"),
        r#"{"language": "french", "list": {"separator": "; ", "final": " ou "},
            "messages": {"InheritsList": "Dérive de {list}."}}"#,
    )
    .unwrap();

    let config = Config {
        output_language: "french".to_string(),
        optimize_c: true,
        extract_all: false,
        dot_image_format: "svg".to_string(),
        translations_dir: Some(dir.path().to_path_buf()),
    };
    let translator = config.translator().unwrap();

    assert_eq!(
        translator.list(MessageKey::InheritsList, 3).unwrap(),
        "Dérive de @0; @1 ou @2."
    );
    assert_eq!(
        translator
            .localize(MessageKey::CompoundList, &config.format_params())
            .unwrap(),
        "Data Structures"
    );
    assert!(translator
        .localize(MessageKey::LegendDocs, &config.format_params())
        .unwrap()
        .contains("graph_legend.svg"));
}
