//! Terminal rendering of cards, the detail view and option lists.
//!
//! Missing data is shown as a neutral placeholder ("Cost TBD", "Ages TBD"),
//! never as an error.

use catalog::{AgeRange, Catalog, Cost, Entry};
use chrono::{Duration, NaiveDate};
use colored::Colorize;
use pipeline::{DerivedFacets, InferencePolicy};
use std::fmt::{self, Write};

/// Categories shown on a card; the detail view shows all of them
const CARD_CATEGORY_LIMIT: usize = 2;

const NO_MATCHES: &str = "No camps match these filters. Try removing one.";

/// "3 camps found" / "1 camp found"
pub fn results_count(count: usize) -> String {
    format!("{} camp{} found", count, if count == 1 { "" } else { "s" })
}

/// Short age label for cards: "5-12 yrs", "?-12 yrs", "Ages TBD"
pub fn age_label(ages: &AgeRange) -> String {
    if ages.is_unknown() {
        return "Ages TBD".to_string();
    }
    format!("{}-{} yrs", bound(ages.min), bound(ages.max))
}

/// Age sentence for the detail view
pub fn age_sentence(ages: &AgeRange) -> String {
    if ages.is_unknown() {
        return "Ages not specified".to_string();
    }
    format!("Ages {} to {}", bound(ages.min), bound(ages.max))
}

fn bound(age: Option<u8>) -> String {
    age.map_or_else(|| "?".to_string(), |a| a.to_string())
}

/// "$300/week" or "Cost TBD"
pub fn cost_label(cost: &Cost) -> String {
    match cost.per_week {
        Some(price) => format!("{}/week", dollars(price)),
        None => "Cost TBD".to_string(),
    }
}

fn dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn location_label(entry: &Entry) -> &str {
    entry.location.town.as_deref().map_or("Location TBD", str::trim)
}

/// A session week as Monday through Friday: "Jul 6 - Jul 10"
pub fn session_label(monday: NaiveDate) -> String {
    let friday = monday + Duration::days(4);
    format!("{} - {}", monday.format("%b %-d"), friday.format("%b %-d"))
}

/// Where to send the user: the registration page, else the source page
pub fn website(entry: &Entry) -> Option<&str> {
    entry
        .registration
        .url
        .as_deref()
        .or(entry.source.url.as_deref())
}

/// One grid card
pub fn card(entry: &Entry, catalog: &Catalog, facets: &DerivedFacets) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}  {}", entry.name.bold(), format!("[{}]", entry.id).dimmed())?;
    if let Some(organization) = &entry.organization {
        writeln!(out, "  {}", organization.italic())?;
    }
    writeln!(
        out,
        "  {} | {} | {}",
        age_label(&entry.ages).bold(),
        cost_label(&entry.cost).bold(),
        location_label(entry)
    )?;
    if let Some(description) = &entry.description {
        writeln!(out, "  {}", description)?;
    }

    let tags = catalog.category_names(entry, CARD_CATEGORY_LIMIT);
    if !tags.is_empty() {
        writeln!(out, "  {}", tags.join(", ").cyan())?;
    }

    let badges = badges(facets);
    if !badges.is_empty() {
        writeln!(out, "  {}", badges.join(" ").green())?;
    }

    Ok(out)
}

fn badges(facets: &DerivedFacets) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if facets.early_dropoff {
        badges.push("[Early drop-off]");
    }
    if facets.late_pickup == Some(true) {
        badges.push("[Late pickup]");
    }
    if facets.financial_aid {
        badges.push("[Financial aid]");
    }
    badges
}

/// The full detail view for one camp
pub fn detail(entry: &Entry, catalog: &Catalog, policy: InferencePolicy) -> Result<String, fmt::Error> {
    let facets = DerivedFacets::infer(policy, entry);
    let mut out = String::new();

    writeln!(out, "{}", entry.name.bold().blue())?;
    if let Some(organization) = &entry.organization {
        writeln!(out, "{}", organization.italic())?;
    }
    writeln!(
        out,
        "\n{}",
        entry
            .description
            .as_deref()
            .unwrap_or("No description available.")
    )?;

    section(&mut out, "Age Range")?;
    writeln!(out, "  {}", age_sentence(&entry.ages))?;

    section(&mut out, "Location")?;
    let location = match (&entry.location.town, &entry.location.address) {
        (Some(town), Some(address)) => format!("{} - {}", town.trim(), address),
        (Some(town), None) => town.trim().to_string(),
        (None, Some(address)) => address.clone(),
        (None, None) => "Not specified".to_string(),
    };
    writeln!(out, "  {}", location)?;

    let schedule = &entry.schedule;
    let mut hours = Vec::new();
    if let Some(regular) = &schedule.hours {
        hours.push(format!("Regular hours: {}", regular));
    }
    if let Some(extended_care) = &schedule.extended_care {
        if facets.early_dropoff {
            hours.push("Early drop-off: Available".to_string());
        }
        if facets.late_pickup == Some(true) {
            hours.push("Late pickup (5pm+): Available".to_string());
        }
        hours.push(extended_care.clone());
    }
    list_section(&mut out, "Hours & Extended Care", &hours)?;

    let mut cost = Vec::new();
    if entry.cost.per_week.is_some() {
        cost.push(format!("Cost: {}", cost_label(&entry.cost)));
    }
    if let Some(notes) = &entry.cost.notes {
        cost.push(notes.clone());
    }
    if entry.cost.financial_aid {
        cost.push("Financial aid: Available".to_string());
    }
    list_section(&mut out, "Cost & Financial Aid", &cost)?;

    section(&mut out, "Dates")?;
    if schedule.weeks.is_empty() {
        writeln!(out, "  Sessions: Check website for dates")?;
    } else {
        writeln!(out, "  Sessions:")?;
        for week in &schedule.weeks {
            writeln!(out, "    - {}", session_label(*week))?;
        }
    }
    if let Some(length) = &schedule.session_length {
        writeln!(out, "  Session length: {}", length)?;
    }

    let mut registration = Vec::new();
    if let Some(opens) = &entry.registration.opens {
        registration.push(format!("Registration opens: {}", opens));
    }
    if let Some(deadline) = &entry.registration.deadline {
        registration.push(format!("Deadline: {}", deadline));
    }
    list_section(&mut out, "Registration", &registration)?;

    let categories = catalog.category_names(entry, usize::MAX);
    if !categories.is_empty() {
        section(&mut out, "Categories")?;
        writeln!(out, "  {}", categories.join(", ").cyan())?;
    }

    if !entry.incomplete.is_empty() {
        writeln!(
            out,
            "\n{}",
            format!(
                "Some information is missing: {}. Please verify with the camp directly.",
                entry.incomplete.join(", ")
            )
            .yellow()
        )?;
    }

    if let Some(url) = website(entry) {
        writeln!(out, "\nVisit camp website: {}", url.underline())?;
    }
    if let Some(verified) = &entry.source.last_verified {
        writeln!(out, "{}", format!("Last verified: {}", verified).dimmed())?;
    }

    Ok(out)
}

/// The `list` output: result count, data date, then one card per match
pub fn listing(
    catalog: &Catalog,
    matching: &[&Entry],
    policy: InferencePolicy,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", results_count(matching.len()).bold().blue())?;
    if let Some(updated) = catalog.last_updated() {
        writeln!(out, "{}", format!("Last updated: {}", updated).dimmed())?;
    }

    if matching.is_empty() {
        writeln!(out, "\n{}", NO_MATCHES)?;
        return Ok(out);
    }

    for entry in matching {
        let facets = DerivedFacets::infer(policy, entry);
        writeln!(out, "\n{}", card(entry, catalog, &facets)?)?;
    }

    Ok(out)
}

/// The `show` output. An id not in the catalog renders nothing.
pub fn detail_for(
    catalog: &Catalog,
    id: &str,
    policy: InferencePolicy,
) -> Result<Option<String>, fmt::Error> {
    catalog
        .get_entry(id)
        .map(|entry| detail(entry, catalog, policy))
        .transpose()
}

fn section(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "\n{}", title.bold())
}

/// A titled bullet list, skipped entirely when there is nothing to list
fn list_section(out: &mut String, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    section(out, title)?;
    for item in items {
        writeln!(out, "  - {}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, DateOrText};

    fn sample_catalog(entry: Entry) -> Catalog {
        Catalog::from_parts(
            vec![entry],
            vec![
                Category { id: "arts".to_string(), name: "Arts & Crafts".to_string() },
                Category { id: "stem".to_string(), name: "STEM".to_string() },
                Category { id: "outdoor".to_string(), name: "Outdoor".to_string() },
            ],
            serde_json::Value::Null,
            None,
        )
    }

    fn sunshine() -> Entry {
        let mut entry = Entry::new("sunshine", "Sunshine Day Camp");
        entry.organization = Some("Amherst Recreation".to_string());
        entry.ages = AgeRange { min: Some(5), max: Some(12) };
        entry.location.town = Some("Amherst".to_string());
        entry.cost.per_week = Some(300.0);
        entry.cost.financial_aid = true;
        entry.categories = vec!["ghost".to_string(), "arts".to_string(), "stem".to_string()];
        entry.schedule.hours = Some("9am - 3pm".to_string());
        entry.schedule.extended_care = Some("Drop-off from 7:30am".to_string());
        entry.schedule.weeks = vec![NaiveDate::from_ymd_opt(2026, 7, 6).unwrap()];
        entry.registration.deadline = Some(DateOrText::Text("rolling".to_string()));
        entry.source.url = Some("https://example.org/sunshine".to_string());
        entry.incomplete = vec!["address".to_string()];
        entry
    }

    #[test]
    fn test_results_count() {
        assert_eq!(results_count(0), "0 camps found");
        assert_eq!(results_count(1), "1 camp found");
        assert_eq!(results_count(12), "12 camps found");
    }

    #[test]
    fn test_age_labels() {
        assert_eq!(age_label(&AgeRange { min: Some(5), max: Some(12) }), "5-12 yrs");
        assert_eq!(age_label(&AgeRange { min: None, max: Some(12) }), "?-12 yrs");
        assert_eq!(age_label(&AgeRange::default()), "Ages TBD");
        assert_eq!(age_sentence(&AgeRange { min: Some(6), max: None }), "Ages 6 to ?");
        assert_eq!(age_sentence(&AgeRange::default()), "Ages not specified");
    }

    #[test]
    fn test_cost_label() {
        let mut cost = Cost::default();
        assert_eq!(cost_label(&cost), "Cost TBD");

        cost.per_week = Some(300.0);
        assert_eq!(cost_label(&cost), "$300/week");

        cost.per_week = Some(287.5);
        assert_eq!(cost_label(&cost), "$287.50/week");
    }

    #[test]
    fn test_session_label_spans_monday_to_friday() {
        let monday = NaiveDate::from_ymd_opt(2026, 7, 6).unwrap();
        assert_eq!(session_label(monday), "Jul 6 - Jul 10");

        let month_end = NaiveDate::from_ymd_opt(2026, 6, 29).unwrap();
        assert_eq!(session_label(month_end), "Jun 29 - Jul 3");
    }

    #[test]
    fn test_website_prefers_registration() {
        let mut entry = sunshine();
        assert_eq!(website(&entry), Some("https://example.org/sunshine"));

        entry.registration.url = Some("https://example.org/register".to_string());
        assert_eq!(website(&entry), Some("https://example.org/register"));

        assert_eq!(website(&Entry::new("bare", "Bare")), None);
    }

    #[test]
    fn test_card_contents() {
        let entry = sunshine();
        let catalog = sample_catalog(entry.clone());
        let facets = DerivedFacets::infer(InferencePolicy::TimeThreshold, &entry);

        let card = card(&entry, &catalog, &facets).unwrap();
        assert!(card.contains("Sunshine Day Camp"));
        assert!(card.contains("5-12 yrs"));
        assert!(card.contains("$300/week"));
        assert!(card.contains("Amherst"));
        // Only the first two category ids are shown, and "ghost" is unknown
        assert!(card.contains("Arts & Crafts"));
        assert!(!card.contains("STEM"));
        assert!(card.contains("[Early drop-off]"));
        assert!(card.contains("[Financial aid]"));
        assert!(!card.contains("[Late pickup]"));
    }

    #[test]
    fn test_card_placeholders() {
        let entry = Entry::new("bare", "Bare Camp");
        let catalog = sample_catalog(entry.clone());
        let facets = DerivedFacets::infer(InferencePolicy::Keyword, &entry);

        let card = card(&entry, &catalog, &facets).unwrap();
        assert!(card.contains("Ages TBD"));
        assert!(card.contains("Cost TBD"));
        assert!(card.contains("Location TBD"));
    }

    #[test]
    fn test_detail_contents() {
        let entry = sunshine();
        let catalog = sample_catalog(entry.clone());

        let detail = detail(&entry, &catalog, InferencePolicy::TimeThreshold).unwrap();
        assert!(detail.contains("Ages 5 to 12"));
        assert!(detail.contains("Regular hours: 9am - 3pm"));
        assert!(detail.contains("Early drop-off: Available"));
        assert!(detail.contains("Jul 6 - Jul 10"));
        assert!(detail.contains("Deadline: rolling"));
        assert!(detail.contains("STEM"));
        assert!(detail.contains("Some information is missing: address."));
        assert!(detail.contains("https://example.org/sunshine"));
        assert!(!detail.contains("Late pickup"));
    }

    #[test]
    fn test_detail_placeholders() {
        let entry = Entry::new("bare", "Bare Camp");
        let catalog = sample_catalog(entry.clone());

        let detail = detail(&entry, &catalog, InferencePolicy::Keyword).unwrap();
        assert!(detail.contains("No description available."));
        assert!(detail.contains("Ages not specified"));
        assert!(detail.contains("Not specified"));
        assert!(detail.contains("Check website for dates"));
        assert!(!detail.contains("Cost & Financial Aid"));
    }

    #[test]
    fn test_listing_with_matches() {
        let entry = sunshine();
        let catalog = Catalog::from_parts(
            vec![entry.clone()],
            Vec::new(),
            serde_json::Value::Null,
            Some("2026-03-01".to_string()),
        );

        let listing = listing(&catalog, &[&entry], InferencePolicy::TimeThreshold).unwrap();
        assert!(listing.contains("1 camp found"));
        assert!(listing.contains("Last updated: 2026-03-01"));
        assert!(listing.contains("Sunshine Day Camp"));
        assert!(!listing.contains(NO_MATCHES));
    }

    #[test]
    fn test_listing_without_matches() {
        let catalog = sample_catalog(sunshine());

        let listing = listing(&catalog, &[], InferencePolicy::TimeThreshold).unwrap();
        assert!(listing.contains("0 camps found"));
        assert!(listing.contains(NO_MATCHES));
        assert!(!listing.contains("Sunshine Day Camp"));
        assert!(!listing.contains("Last updated"));
    }

    #[test]
    fn test_detail_for_known_and_unknown_ids() {
        let catalog = sample_catalog(sunshine());

        let found = detail_for(&catalog, "sunshine", InferencePolicy::TimeThreshold).unwrap();
        assert!(found.is_some_and(|text| text.contains("Sunshine Day Camp")));

        let missing = detail_for(&catalog, "no-such-camp", InferencePolicy::TimeThreshold).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_town_is_trimmed_for_display() {
        let mut entry = Entry::new("padded", "Padded Camp");
        entry.location.town = Some("Amherst ".to_string());
        assert_eq!(location_label(&entry), "Amherst");
    }
}
