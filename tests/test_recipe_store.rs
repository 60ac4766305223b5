use std::fs;

use reseptikirja::{build_shopping_list, catalog, parse_recipe_text, store, ImportError};

#[test]
fn test_import_save_and_shop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");

    for text in [
        "Pannukakku\nAinekset\n5 dl maitoa\n2 kananmunaa\nOhjeet\nPaista.",
        "Puuro\nAinekset\n2 dl kaurahiutaleita\n6 dl maitoa\nOhjeet\nKeitä.",
        "Lohikeitto\nAinekset\n400 g lohta\n2 dl kermaa\nOhjeet\nKeitä.",
    ] {
        let recipe = parse_recipe_text(text).unwrap();
        store::upsert_recipe(&path, &recipe).unwrap();
    }

    let book = store::load_recipes(&path).unwrap();
    assert_eq!(book.len(), 3);

    let names: Vec<&str> = catalog::search(&book, "")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Lohikeitto", "Pannukakku", "Puuro"]);

    let selected = catalog::select(&book, &["puuro", "Pannukakku"]).unwrap();
    let lines: Vec<String> = build_shopping_list(selected)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec!["kananmunaa: 2", "kaurahiutaleita: 2 dl", "maitoa: 1.1 l"]
    );
}

#[test]
fn test_store_written_by_older_app_versions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(
        &path,
        r#"[
            {
                "name": "Kaakao",
                "ingredients": [
                    {"name": "maitoa", "amount": "2", "unit": "desilitraa"},
                    {"name": "kaakaojauhetta", "amount": "1,5", "unit": "tl"},
                    {"name": "sokeria", "amount": ""}
                ],
                "steps": "Lämmitä maito.\nSekoita joukkoon jauhe."
            }
        ]"#,
    )
    .unwrap();

    let book = store::load_recipes(&path).unwrap();
    let kaakao = &book[0];
    assert_eq!(kaakao.ingredients[0].amount, Some(2.0));
    assert_eq!(kaakao.ingredients[1].amount, Some(1.5));
    assert_eq!(kaakao.ingredients[2].amount, None);
    assert_eq!(kaakao.steps.len(), 2);

    // Units are canonicalized on aggregation even if stored raw
    let list = build_shopping_list(&book);
    let milk = list.iter().find(|item| item.name == "maitoa").unwrap();
    assert_eq!(milk.unit, "dl");
}

#[test]
fn test_unknown_selection_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");
    let book = store::load_recipes(&path).unwrap();
    assert!(book.is_empty());

    match catalog::select(&book, &["Lihapullat"]) {
        Err(ImportError::RecipeNotFound(name)) => assert_eq!(name, "Lihapullat"),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(found) => panic!("expected no match, got {} recipes", found.len()),
    }
}
