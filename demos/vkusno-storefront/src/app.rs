//! Page components.

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use vkusno_commerce::prelude::*;

use crate::shop::Shop;

const STORE_CONFIG_TOML: &str = include_str!("../store.toml");

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    match StoreConfig::from_toml_str(STORE_CONFIG_TOML) {
        Ok(config) => {
            provide_context(Shop::new(config));

            view! {
                <div class="page">
                    <Header/>
                    <CartDrawer/>
                    <Hero/>
                    <main class="container catalog">
                        <CatalogTabs/>
                        <ProductGrid/>
                    </main>
                    <Footer/>
                </div>
            }
            .into_any()
        }
        Err(e) => view! {
            <main class="container">
                <p class="error">"Не удалось загрузить настройки магазина: " {e.to_string()}</p>
            </main>
        }
        .into_any(),
    }
}

#[component]
fn Glyph(icon: Icon) -> impl IntoView {
    view! {
        <span class="icon" data-icon=icon.name() aria-hidden="true">{icon.glyph()}</span>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let shop = Shop::use_shop();
    let name = shop.config(|c| c.store.name.clone());

    let badge = move || {
        let count = shop.with(|s| s.badge_count());
        (count > 0).then(|| view! { <span class="badge">{count.to_string()}</span> })
    };

    view! {
        <header class="site-header">
            <div class="container header-row">
                <h1 class="brand">{name}</h1>
                <button
                    class="btn btn-outline cart-button"
                    aria-label="Корзина"
                    on:click=move |_| shop.dispatch(StoreAction::OpenCart)
                >
                    <Glyph icon=Icon::ShoppingCart/>
                    {badge}
                </button>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let shop = Shop::use_shop();
    let free_from = shop.config(|c| c.delivery.free_threshold);

    view! {
        <section class="hero">
            <div class="container">
                <h2>"Свежие продукты с доставкой"</h2>
                <p class="lead">
                    "Отборные продукты питания с контролем качества и сроков годности. "
                    "Доставим в течение 2 часов."
                </p>
                <div class="perks">
                    <span><Glyph icon=Icon::Clock/>" Доставка за 2 часа"</span>
                    <span><Glyph icon=Icon::Shield/>" Контроль качества"</span>
                    <span><Glyph icon=Icon::Truck/>" Бесплатно от " {free_from.display()}</span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let shop = Shop::use_shop();
    let (store, delivery) = shop.config(|c| (c.store.clone(), c.delivery));
    let year = Utc::now().year();
    let copyright = format!("\u{a9} {} {}. Все права защищены.", year, store.name);

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h3>{store.name.clone()}</h3>
                    <p>"Лучшие продукты питания с быстрой доставкой и гарантией качества."</p>
                </div>
                <div>
                    <h4>"Контакты"</h4>
                    <p><Glyph icon=Icon::Phone/>" " {store.phone}</p>
                    <p><Glyph icon=Icon::Mail/>" " {store.email}</p>
                    <p><Glyph icon=Icon::MapPin/>" " {store.address}</p>
                </div>
                <div>
                    <h4>"Условия"</h4>
                    <p>"\u{2022} Доставка от " {delivery.flat_fee.display()}</p>
                    <p>"\u{2022} Бесплатно от " {delivery.free_threshold.display()}</p>
                    <p>"\u{2022} Время доставки: 2-4 часа"</p>
                    <p>"\u{2022} Оплата наличными и картой"</p>
                </div>
            </div>
            <p class="container copyright">{copyright}</p>
        </footer>
    }
}

// ============================================================================
// Catalog Components
// ============================================================================

#[component]
fn CatalogTabs() -> impl IntoView {
    let shop = Shop::use_shop();

    view! {
        <nav class="tabs" role="tablist">
            {Category::tabs().into_iter().map(|tab| {
                let filter = tab.filter;
                let active = move || shop.with(|s| s.selected == filter);
                view! {
                    <button
                        role="tab"
                        class="tab"
                        class:active=active
                        aria-selected=move || active().to_string()
                        on:click=move |_| shop.dispatch(StoreAction::SelectCategory(filter))
                    >
                        <Glyph icon=tab.icon/>
                        <span class="tab-label">{tab.name}</span>
                    </button>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}

#[component]
fn ProductGrid() -> impl IntoView {
    let shop = Shop::use_shop();

    view! {
        <div class="products">
            <For
                each=move || shop.visible_products()
                key=|product| product.id
                children=move |product| view! { <ProductCard product=product/> }
            />
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let shop = Shop::use_shop();
    let id = product.id;
    let expiring = shop.is_expiring_soon(&product);
    let price = product.price.display();
    let expiry = format!("до {}", product.expiry);

    view! {
        <article class="product-card">
            <div class="product-image">
                <img src=product.image.clone() alt=product.name.clone()/>
                {expiring.then(|| view! { <span class="badge badge-warning">"Скоро истечет"</span> })}
            </div>
            <div class="product-info">
                <h3>{product.name}</h3>
                <p class="muted">{product.description}</p>
                <div class="price-row">
                    <span class="price">{price}</span>
                    <span class="muted">"за " {product.unit}</span>
                </div>
                <p class="muted expiry"><Glyph icon=Icon::Calendar/>" " {expiry}</p>
            </div>
            <button
                class="btn btn-accent wide"
                on:click=move |_| shop.dispatch(StoreAction::AddToCart(id))
            >
                <Glyph icon=Icon::Plus/>
                " В корзину"
            </button>
        </article>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartDrawer() -> impl IntoView {
    let shop = Shop::use_shop();
    let is_open = move || shop.with(|s| s.cart_open);
    let has_items = move || shop.with(|s| !s.cart.is_empty());
    let close = move |_| shop.dispatch(StoreAction::CloseCart);

    view! {
        <Show when=is_open>
            <div class="drawer-overlay" on:click=close></div>
            <aside class="drawer" role="dialog" aria-label="Корзина">
                <div class="drawer-header">
                    <h2>"Корзина"</h2>
                    <button class="btn btn-ghost" aria-label="Закрыть" on:click=close>"\u{d7}"</button>
                </div>
                <Show
                    when=has_items
                    fallback=|| view! { <p class="muted empty">"Корзина пуста"</p> }
                >
                    <For
                        each=move || shop.with(|s| s.cart.items().to_vec())
                        key=|item| (item.id(), item.quantity)
                        children=move |item| view! { <CartLine item=item/> }
                    />
                    <CartSummary/>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let shop = Shop::use_shop();
    let id = item.id();
    let price = item.product.price_per_unit();

    view! {
        <div class="cart-line">
            <img src=item.product.image.clone() alt=item.product.name.clone()/>
            <div class="cart-line-info">
                <h4>{item.product.name.clone()}</h4>
                <p class="muted">{price}</p>
            </div>
            <div class="quantity">
                <button class="btn btn-outline btn-sm" on:click=move |_| shop.dispatch(StoreAction::Decrement(id))>
                    <Glyph icon=Icon::Minus/>
                </button>
                <span>{item.quantity.to_string()}</span>
                <button class="btn btn-outline btn-sm" on:click=move |_| shop.dispatch(StoreAction::Increment(id))>
                    <Glyph icon=Icon::Plus/>
                </button>
            </div>
        </div>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let shop = Shop::use_shop();
    let pricing = move || shop.pricing();

    let hint = move || {
        let missing = shop.config(|c| c.delivery.amount_until_free(pricing().subtotal));
        missing.is_positive().then(|| {
            view! { <p class="muted hint">"До бесплатной доставки: " {missing.display()}</p> }
        })
    };

    let order_note = move || {
        shop.with(|s| s.last_order.as_ref().map(|o| (o.unit_count(), o.amount_due())))
            .map(|(units, due)| {
                view! {
                    <p class="order-note">
                        "Заказ сформирован: " {units.to_string()} " шт. на " {due.display()}
                    </p>
                }
            })
    };

    view! {
        <div class="summary">
            <div class="row">
                <span>"Товары:"</span>
                <span>{move || pricing().subtotal.display()}</span>
            </div>
            <div class="row">
                <span>"Доставка:"</span>
                <span>{move || pricing().delivery_label()}</span>
            </div>
            <div class="row total">
                <span>"Итого:"</span>
                <span>{move || pricing().grand_total.display()}</span>
            </div>
            {hint}
            <button class="btn btn-accent wide" on:click=move |_| shop.checkout()>
                "Оформить заказ"
            </button>
            {order_note}
        </div>
    }
}
