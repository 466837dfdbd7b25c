use leptos::prelude::*;

use crate::models::CoffeeItem;

#[component]
pub fn CoffeeCard(coffee: CoffeeItem) -> impl IntoView {
    let coffee_type = coffee.coffee_type;

    view! {
        <div class="coffee-card">
            <div class="coffee-image">
                <span class=coffee_type.badge_class()>{coffee_type.as_str()}</span>
                <img src=coffee.image_path() alt=coffee.name.clone() />
            </div>
            <div class="coffee-body">
                <h3 class="coffee-name">{coffee.name.clone()}</h3>
                <p class="coffee-description">{coffee.description.clone()}</p>
                <span class="coffee-price">{coffee.display_price()}</span>
            </div>
        </div>
    }
}
