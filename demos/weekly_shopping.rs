//! Build a week's shopping list and keep check marks across rebuilds
//!
//! Run with: cargo run --example weekly_shopping

use reseptikirja::{build_shopping_list, catalog, parse_recipe_text, Checklist};

const RECIPES: &[&str] = &[
    "Pannukakku\nAinekset\n5 dl maitoa\n2 kananmunaa\n2½ dl vehnäjauhoja\n50 g voita\nOhjeet\nSekoita ja paista uunissa.",
    "Kaurapuuro\nAinekset\n2 dl kaurahiutaleita\n4 dl vettä\nripaus suolaa\nOhjeet\nKeitä 5 minuuttia.",
    "Makaronilaatikko\nAinekset\n400 g makaronia\n400 g jauhelihaa\n8 dl maitoa\n3 kananmunaa\n1 tl suolaa\nOhjeet\nKypsennä uunissa tunti.",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let book = RECIPES
        .iter()
        .map(|text| parse_recipe_text(text))
        .collect::<Result<Vec<_>, _>>()?;

    let selected = catalog::select(&book, &["Pannukakku", "makaronilaatikko"])?;
    let list = build_shopping_list(selected);

    println!("=== Shopping list ===");
    let mut checklist = Checklist::new();
    for item in &list {
        let sources: Vec<&str> = item.source_recipes.iter().map(String::as_str).collect();
        println!("[ ] {}  ({})", item, sources.join(", "));
    }

    // Tick off the milk, then add porridge to the week
    if let Some(milk) = list.iter().find(|item| item.name == "maitoa") {
        checklist.toggle(milk);
    }

    let list = build_shopping_list(&book);
    let dropped = checklist.reconcile(&list);
    println!("\n=== With porridge ({} stale check marks dropped) ===", dropped);
    for item in &list {
        let mark = if checklist.is_checked(item) { "x" } else { " " };
        println!("[{}] {}", mark, item);
    }

    Ok(())
}
