//! Modal body for one AI-generated recipe.

#[cfg(test)]
#[path = "recipe_card_test.rs"]
mod recipe_card_test;

use leptos::prelude::*;
use schema::GeneratedRecipe;

/// Grams without decimals, e.g. `"42g"`; calories without a unit.
pub fn macro_text(value: f64, unit: &str) -> String {
    if value.is_finite() { format!("{value:.0}{unit}") } else { format!("0{unit}") }
}

/// Pair each item with its zero-based index, used as the list key.
pub fn keyed(items: &[String]) -> Vec<(usize, String)> {
    items.iter().cloned().enumerate().collect()
}

#[component]
pub fn RecipeCard(recipe: GeneratedRecipe, on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let macros = recipe.macros;
    let prep_time = recipe.prep_time;
    let has_prep = !prep_time.is_empty();
    let ingredients = keyed(&recipe.ingredients);
    let instructions = keyed(&recipe.instructions);

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog recipe-card"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <header class="recipe-card__header">
                    <div>
                        <span class="recipe-card__badge">"AI Generated"</span>
                        <h2 class="recipe-card__title">{recipe.name}</h2>
                        <p class="recipe-card__description">
                            {recipe.description}
                            <Show when=move || has_prep>
                                <span class="recipe-card__prep">{prep_time.clone()}</span>
                            </Show>
                        </p>
                    </div>
                    <button class="btn recipe-card__close" title="Close" on:click=on_close_click>
                        "×"
                    </button>
                </header>

                <div class="recipe-card__macros">
                    <div class="recipe-card__macro">
                        <span>"Calories"</span>
                        <strong>{macro_text(macros.calories, "")}</strong>
                    </div>
                    <div class="recipe-card__macro">
                        <span>"Protein"</span>
                        <strong>{macro_text(macros.protein, "g")}</strong>
                    </div>
                    <div class="recipe-card__macro">
                        <span>"Carbs"</span>
                        <strong>{macro_text(macros.carbs, "g")}</strong>
                    </div>
                    <div class="recipe-card__macro">
                        <span>"Fat"</span>
                        <strong>{macro_text(macros.fat, "g")}</strong>
                    </div>
                </div>

                <div class="recipe-card__body">
                    <section>
                        <h3>"Ingredients"</h3>
                        <ul class="recipe-card__ingredients">
                            <For each=move || ingredients.clone() key=|(i, _)| *i let:item>
                                <li>{item.1}</li>
                            </For>
                        </ul>
                    </section>
                    <section>
                        <h3>"Instructions"</h3>
                        <ol class="recipe-card__steps">
                            <For each=move || instructions.clone() key=|(i, _)| *i let:step>
                                <li>
                                    <span class="recipe-card__step-no">{step.0 + 1}</span>
                                    <span>{step.1}</span>
                                </li>
                            </For>
                        </ol>
                    </section>
                </div>
            </div>
        </div>
    }
}
