//! Plain-text rendering of the marketplace pages.

use std::io::{self, Write};

use marketplace_app::{
    domain::products::{
        Product, ProductId,
        format::{posted_on, title_case},
    },
    paths::Route,
    sync::ViewState,
    views::{
        listings::{self, Listing, ListingPresentation},
        product::{self, ProductDetail, ProductPresentation},
    },
};

pub(crate) fn listing<W: Write>(out: &mut W, state: &ViewState<Listing>) -> io::Result<()> {
    match listings::present(state) {
        ListingPresentation::Loading => writeln!(out, "Loading..."),
        ListingPresentation::Empty => writeln!(out, "No products listed yet."),
        ListingPresentation::Items(products) => {
            for product in products {
                listing_row(out, product)?;
            }

            Ok(())
        }
    }
}

fn listing_row<W: Write>(out: &mut W, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "{}  {}  {}  ${}  {}",
        product.id,
        product.name,
        product.description,
        product.price,
        product.main_image().unwrap_or("-"),
    )
}

pub(crate) fn product_detail<W: Write>(
    out: &mut W,
    state: &ViewState<ProductDetail>,
) -> io::Result<()> {
    let product = match product::present(state) {
        ProductPresentation::Loading => return writeln!(out, "Loading..."),
        ProductPresentation::NotFound => return writeln!(out, "Product not found."),
        ProductPresentation::Detail(product) => product,
    };

    writeln!(out, "{}", title_case(&product.name))?;
    writeln!(out, "${}", product.price)?;

    if let Some(condition) = &product.condition {
        writeln!(out, "Condition: {}", title_case(condition))?;
    }

    if let Some(color) = &product.color {
        writeln!(out, "Color: {}", title_case(color))?;
    }

    writeln!(out, "Posted {}", posted_on(product.created_at))?;
    writeln!(out)?;
    writeln!(out, "{}", product.description)?;

    for image in &product.images {
        writeln!(out, "  {image}")?;
    }

    Ok(())
}

pub(crate) fn redirected<W: Write>(out: &mut W, route: Option<&Route>) -> io::Result<()> {
    match route {
        Some(route) => writeln!(out, "Redirected to {route}"),
        None => writeln!(out, "Sign in required."),
    }
}

pub(crate) fn created<W: Write>(out: &mut W, id: &ProductId) -> io::Result<()> {
    writeln!(out, "Created product {id}")
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use marketplace_app::{
        channels::Identity,
        sync::{ViewEvent, reduce},
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn lamp() -> TestResult<Product> {
        Ok(Product {
            id: ProductId::new("lamp01"),
            name: "Lamp".to_string(),
            description: "Brass desk lamp".to_string(),
            price: Decimal::new(550, 2),
            created_at: "2024-03-05T12:00:00Z".parse::<Timestamp>()?,
            images: vec!["https://img/lamp.jpg".to_string()],
            condition: Some("like new".to_string()),
            color: None,
        })
    }

    fn loaded<T>(data: T) -> ViewState<T> {
        let mut state = ViewState::new(true);

        reduce(&mut state, ViewEvent::Auth(Some(Identity::new("u1"))));
        reduce(&mut state, ViewEvent::Data(data));

        state
    }

    fn rendered(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> TestResult<String> {
        let mut out = Vec::new();

        write(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn listing_shows_loading_before_first_snapshot() -> TestResult {
        let state = ViewState::<Listing>::new(true);

        assert_eq!(rendered(|out| listing(out, &state))?, "Loading...\n");

        Ok(())
    }

    #[test]
    fn empty_listing_says_so() -> TestResult {
        let state = loaded(Listing(Vec::new()));

        assert_eq!(rendered(|out| listing(out, &state))?, "No products listed yet.\n");

        Ok(())
    }

    #[test]
    fn listing_rows_show_description_and_main_image() -> TestResult {
        let state = loaded(Listing(vec![lamp()?]));

        assert_eq!(
            rendered(|out| listing(out, &state))?,
            "lamp01  Lamp  Brass desk lamp  $5.50  https://img/lamp.jpg\n"
        );

        Ok(())
    }

    #[test]
    fn detail_formats_labels_and_date() -> TestResult {
        let state = loaded(ProductDetail::Found(lamp()?));
        let page = rendered(|out| product_detail(out, &state))?;

        assert!(page.contains("Condition: Like New"), "condition not title cased: {page}");
        assert!(page.contains("Posted March 5, 2024"), "date not formatted: {page}");
        assert!(!page.contains("Color:"), "absent color should be omitted: {page}");

        Ok(())
    }

    #[test]
    fn redirect_names_target_route() -> TestResult {
        let route = Route::new("/login");

        assert_eq!(
            rendered(|out| redirected(out, Some(&route)))?,
            "Redirected to /login\n"
        );

        Ok(())
    }

    #[test]
    fn missing_product_is_reported() -> TestResult {
        let state = loaded(ProductDetail::NotFound);

        assert_eq!(rendered(|out| product_detail(out, &state))?, "Product not found.\n");

        Ok(())
    }
}
