//! Integration tests for catalog lookups and validation over an imported roster.

use champdle_core::{
    import_csv, AttributeKind, Catalog, Guess, ImportOptions, ScalarField, SearchMode, TagKind,
    Validator,
};

const ROSTER: &str = "\
name,region,role,subclass,specie,release_year,resources,range,gender,champion_type
Ahri,Ionia,\"Mid\",Burst,Vastaya,2011,Mana,Ranged,Female,Mage
Bard,Runeterra,Support,Catcher,Celestial,2015,Mana,Ranged,Male,Controller
Miss Fortune,Bilgewater,Bot,Marksman,Human,2010,Mana,Ranged,Female,Marksman
Kai'Sa,\"The Void, Shurima\",Bot,Marksman,Human,2018,Mana,Ranged,Female,Marksman
Garen,Demacia,Top,Juggernaut,Human,2010,Manaless,Melee,Male,Fighter
Nunu & Willump,Freljord,\"Jungle, Support\",Vanguard,\"Human, Yeti\",2009,Mana,Melee,Male,Tank
Zac,Zaun,\"Jungle, Top\",Vanguard,Golem,2013,Other,Melee,Genderless,Tank
";

struct TestContext {
    catalog: Catalog,
    validator: Validator,
}

impl TestContext {
    fn new() -> Self {
        let catalog = Catalog::temporary().unwrap();
        import_csv(&catalog, ROSTER.as_bytes(), &ImportOptions::new()).unwrap();
        Self {
            catalog,
            validator: Validator::default(),
        }
    }
}

fn swap_case(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                c.to_uppercase().next().unwrap_or(c)
            }
        })
        .collect()
}

// ============== Catalog ==============

#[test]
fn test_every_name_findable_in_any_case() {
    let ctx = TestContext::new();
    let names = ctx.catalog.names();
    assert_eq!(names.len(), 7);

    for name in &names {
        for variant in [name.clone(), name.to_lowercase(), name.to_uppercase(), swap_case(name)] {
            let found = ctx.catalog.find_by_name(&variant).unwrap();
            assert_eq!(&found.name, name);
        }
    }
}

#[test]
fn test_search_results_contain_query() {
    let ctx = TestContext::new();
    for query in ["a", "AR", "nu", "'s", "z", "xyz", "a ", " & ", "s F", " zac"] {
        let results = ctx.catalog.search(query, SearchMode::Contains);
        for name in &results {
            assert!(name.to_lowercase().contains(&query.to_lowercase()));
        }
        let expected: Vec<String> = ctx
            .catalog
            .names()
            .into_iter()
            .filter(|n| n.to_lowercase().contains(&query.to_lowercase()))
            .collect();
        assert_eq!(results, expected);
    }

    assert!(ctx.catalog.search("a ", SearchMode::Contains).is_empty());
    assert_eq!(
        ctx.catalog.search(" & ", SearchMode::Contains),
        vec!["Nunu & Willump"]
    );
}

#[test]
fn test_search_is_idempotent() {
    let ctx = TestContext::new();
    let first = ctx.catalog.search("a", SearchMode::Contains);
    let second = ctx.catalog.search("a", SearchMode::Contains);
    assert_eq!(first, second);
    assert_eq!(first, vec!["Ahri", "Bard", "Kai'Sa", "Garen", "Zac"]);
}

#[test]
fn test_search_prefix_is_subset_of_contains() {
    let ctx = TestContext::new();
    let prefix = ctx.catalog.search("z", SearchMode::Prefix);
    let contains = ctx.catalog.search("z", SearchMode::Contains);
    assert_eq!(prefix, vec!["Zac"]);
    assert!(prefix.iter().all(|n| contains.contains(n)));
}

#[test]
fn test_empty_search() {
    let ctx = TestContext::new();
    assert!(ctx.catalog.search("", SearchMode::Contains).is_empty());
    assert!(ctx.catalog.search("", SearchMode::Prefix).is_empty());
}

#[test]
fn test_tag_listing() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.catalog.tag_values(TagKind::Role),
        vec!["Bot", "Jungle", "Mid", "Support", "Top"]
    );
    assert!(ctx.catalog.tag_values(TagKind::Specie).contains(&"Yeti".to_string()));
}

// ============== Validation ==============

#[test]
fn test_scalar_kinds_match_own_values() {
    let ctx = TestContext::new();
    for name in ctx.catalog.names() {
        let champion = ctx.catalog.find_by_name(&name).unwrap();
        for field in ScalarField::ALL {
            let own = champion.scalar(field).unwrap().to_string();
            let result = ctx.validator.validate(
                &champion,
                &Guess::new(field.as_str(), &own),
                &Guess::new(field.as_str(), "not-a-real-value"),
            );
            assert!(result.row.is_ok(), "{} {}", name, field.as_str());
            assert!(result.col.is_err());
        }
    }
}

#[test]
fn test_release_year_number_and_string_agree() {
    let ctx = TestContext::new();
    let garen = ctx.catalog.find_by_name("garen").unwrap();
    let numeric = Guess::from_json("release_year", &serde_json::json!(2010)).unwrap();
    let text = Guess::from_json("release_year", &serde_json::json!("2010")).unwrap();
    assert!(ctx.validator.check(&garen, &numeric).is_ok());
    assert!(ctx.validator.check(&garen, &text).is_ok());
}

#[test]
fn test_tag_kinds_follow_membership() {
    let ctx = TestContext::new();
    let kinds = [
        (AttributeKind::Role, TagKind::Role),
        (AttributeKind::Subclass, TagKind::Subclass),
        (AttributeKind::Specie, TagKind::Specie),
    ];

    for name in ctx.catalog.names() {
        let champion = ctx.catalog.find_by_name(&name).unwrap();
        for (kind, tag_kind) in kinds {
            for tag in ctx.catalog.tag_values(tag_kind) {
                let verdict = ctx.validator.check(&champion, &Guess::new(kind.as_str(), &tag));
                assert_eq!(
                    verdict.is_ok(),
                    champion.tags(tag_kind).contains(&tag),
                    "{} {} {}",
                    name,
                    kind,
                    tag
                );
            }
        }
    }
}

#[test]
fn test_wildcard_region_for_every_champion() {
    let ctx = TestContext::new();
    for name in ctx.catalog.names() {
        let champion = ctx.catalog.find_by_name(&name).unwrap();
        assert!(ctx
            .validator
            .check(&champion, &Guess::new("region", "Runeterra"))
            .is_ok());
    }
}

#[test]
fn test_multi_region_champion() {
    let ctx = TestContext::new();
    let result = ctx
        .validator
        .validate_named(
            &ctx.catalog,
            "kai'sa",
            &Guess::new("region", "Shurima"),
            &Guess::new("region", "The Void"),
        )
        .unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_not_found_is_distinct_from_mismatch() {
    let ctx = TestContext::new();
    let row = Guess::new("region", "Ionia");
    let col = Guess::new("role", "Support");

    let mismatch = ctx
        .validator
        .validate_named(&ctx.catalog, "Ahri", &row, &col)
        .unwrap();
    assert!(!mismatch.is_valid());
    assert_eq!(
        mismatch.errors(),
        vec!["Invalid role. Expected: Support, Found: [Mid]"]
    );

    let missing = ctx
        .validator
        .validate_named(&ctx.catalog, "Teemo", &row, &col)
        .unwrap_err();
    assert!(missing.is_not_found());
}
