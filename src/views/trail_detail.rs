// ============================================================================
// TRAIL DETAIL VIEW - name banner, badges and the detail grid
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::TrailDetail;
use crate::state::AppState;
use crate::utils::constants::media_url;
use crate::views::render_check_in_out;

// Detail grid list limits
const MAX_TAGS: usize = 14;
const MAX_EQUIPMENT: usize = 14;
const MAX_RECENT_HIKERS: usize = 14;
const MAX_EXPERT_REVIEWS: usize = 5;

/// Top band: trail name, property, open/fee badges and the
/// check-in/check-out controls.
pub fn render_top_details(state: &AppState, trail: &TrailDetail) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("topDetails").build();

    let name_box = ElementBuilder::new("div")?
        .class("namePropBox")
        .child(
            ElementBuilder::new("div")?
                .class("trailName")
                .text(&trail.name)
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("trailProp")
                .text(&trail.prop)
                .build(),
        )?
        .build();
    append_child(&container, &name_box)?;

    let badges = ElementBuilder::new("div")?
        .class("labelsBox")
        .child(
            ElementBuilder::new("div")?
                .class(if trail.is_open {
                    "openFeeBox open"
                } else {
                    "openFeeBox closed"
                })
                .text(trail.open_label())
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("openFeeBox fee")
                .text(&trail.fee_label())
                .build(),
        )?
        .build();
    append_child(&container, &badges)?;

    let check_in_out = render_check_in_out(state)?;
    append_child(&container, &check_in_out)?;

    Ok(container)
}

/// Main grid: image, stats, tags, suggested equipment, recent hikers and
/// expert reviews.
pub fn render_detail_grid(state: &AppState, trail: &TrailDetail) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("detailGrid").build();

    // Trail picture as a background image
    let pic = ElementBuilder::new("div")?
        .class("trailPic")
        .attr(
            "style",
            &format!(
                "background-image: url({}); background-size: cover",
                media_url(&trail.image)
            ),
        )?
        .build();
    append_child(&grid, &pic)?;

    append_child(&grid, &render_stats(trail)?)?;
    append_child(&grid, &render_tags(trail)?)?;
    append_child(&grid, &render_equipment(trail)?)?;
    append_child(&grid, &render_recent_hikers(state)?)?;
    append_child(&grid, &render_expert_reviews(state)?)?;

    Ok(grid)
}

fn detail_line(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("detailLine")
        .child(
            ElementBuilder::new("span")?
                .class("detailLabel")
                .text(label)
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .class("detailValue")
                .text(value)
                .build(),
        )?
        .build())
}

/// One decimal place, or a dash until the trail has rated hikes.
fn rating_text(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "-".to_string(),
    }
}

fn render_stats(trail: &TrailDetail) -> Result<Element, JsValue> {
    let stats = ElementBuilder::new("div")?.class("trailDetails").build();

    append_child(
        &stats,
        &detail_line("Location:", &format!("{}, {}", trail.city, trail.state))?,
    )?;
    append_child(
        &stats,
        &detail_line("Distance:", &format!("{:.1} mi.", trail.distance))?,
    )?;
    append_child(
        &stats,
        &detail_line(
            "Altitude change:",
            &format!("{} ft.", trail.altitude_change),
        )?,
    )?;
    append_child(
        &stats,
        &detail_line("Difficulty:", &rating_text(trail.avg_difficulty))?,
    )?;
    append_child(
        &stats,
        &detail_line("Enjoyability:", &rating_text(trail.avg_enjoyability))?,
    )?;

    let description = ElementBuilder::new("div")?
        .class("trailDescription")
        .text(&trail.description)
        .build();
    append_child(&stats, &description)?;

    Ok(stats)
}

fn render_tags(trail: &TrailDetail) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("div")?
        .class("tagsBox")
        .child(
            ElementBuilder::new("div")?
                .class("detailHeader")
                .text("Tags")
                .build(),
        )?
        .build();

    for tag in trail.tags.iter().take(MAX_TAGS) {
        let tag_el = ElementBuilder::new("div")?
            .class("trailTag")
            .text(&tag.tag)
            .build();
        append_child(&block, &tag_el)?;
    }

    Ok(block)
}

fn render_equipment(trail: &TrailDetail) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("div")?
        .class("recEqu")
        .child(
            ElementBuilder::new("div")?
                .class("detailHeader")
                .text("Suggested Equipment")
                .build(),
        )?
        .build();

    for item in trail.suggested_equipment.iter().take(MAX_EQUIPMENT) {
        let equ_el = ElementBuilder::new("div")?
            .class("equItem")
            .text(&item.equipment_type.equ_type)
            .build();
        append_child(&block, &equ_el)?;
    }

    Ok(block)
}

fn render_recent_hikers(state: &AppState) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("div")?
        .class("recentHikers")
        .child(
            ElementBuilder::new("div")?
                .class("detailHeader")
                .text("Recent Hikers")
                .build(),
        )?
        .build();

    for hiker in state.trail.get_recent_hikers().iter().take(MAX_RECENT_HIKERS) {
        let hiker_el = ElementBuilder::new("div")?
            .class("hikerName")
            .text(&hiker.hiker.user.username)
            .build();
        append_child(&block, &hiker_el)?;
    }

    Ok(block)
}

fn render_expert_reviews(state: &AppState) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("div")?
        .class("expReviews")
        .child(
            ElementBuilder::new("div")?
                .class("detailHeader")
                .text("Expert Reviews")
                .build(),
        )?
        .build();

    for review in state.trail.get_reviews().iter().take(MAX_EXPERT_REVIEWS) {
        let header = ElementBuilder::new("div")?
            .class("revHeader")
            .child(
                ElementBuilder::new("span")?
                    .class("revHiker")
                    .text(&review.hiker.user.username)
                    .build(),
            )?
            .child(
                ElementBuilder::new("span")?
                    .class("revDate")
                    .text(&review.date)
                    .build(),
            )?
            .build();

        let ratings = ElementBuilder::new("div")?
            .class("revRatings")
            .child(
                ElementBuilder::new("span")?
                    .text(&format!("Difficulty: {} / 5", review.difficulty))
                    .build(),
            )?
            .child(
                ElementBuilder::new("span")?
                    .text(&format!("Enjoyability: {} / 5", review.enjoyability))
                    .build(),
            )?
            .build();

        let review_el = ElementBuilder::new("div")?
            .class("expReview")
            .child(header)?
            .child(ratings)?
            .child(
                ElementBuilder::new("div")?
                    .class("revText")
                    .text(&review.review)
                    .build(),
            )?
            .build();
        append_child(&block, &review_el)?;
    }

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_text_formats_one_decimal_or_dash() {
        assert_eq!(rating_text(Some(3.25)), "3.2");
        assert_eq!(rating_text(Some(4.0)), "4.0");
        assert_eq!(rating_text(None), "-");
    }
}
