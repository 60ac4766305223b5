//! Parse a recipe pasted from a web page or a message
//!
//! Run with: cargo run --example parse_pasted

use reseptikirja::{parse_recipe_text, ImportError};

const PASTED: &str = "Lohikeitto

Ainekset
400 g\tlohta
6 perunaa
1 sipuli
2 dl
kuohukermaa
1 l vettä
1½ tl suolaa
tilliä

Ohjeet
1. Kuori ja paloittele perunat ja sipuli.
2. Keitä vedessä kypsiksi.
3. Lisää lohi ja kerma, hauduta 10 minuuttia.
4. Mausta suolalla ja tillillä.
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let recipe = parse_recipe_text(PASTED)?;
    println!("=== {} ===", recipe.name);
    for ingredient in &recipe.ingredients {
        println!("  {:?} {:>4} {}", ingredient.amount, ingredient.unit, ingredient.name);
    }
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    println!("\n=== Back to text ===");
    print!("{}", recipe.to_text());

    // Empty input is the only hard failure
    match parse_recipe_text("\n   \n") {
        Err(e @ ImportError::ParseFailure) => println!("\nEmpty paste rejected: {}", e),
        other => println!("\nUnexpected result: {:?}", other),
    }

    Ok(())
}
