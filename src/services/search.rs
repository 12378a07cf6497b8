// hackhub-service/src/services/search.rs
//
// Free-text and tag filtering over hackathons, teams and users. Matching is
// pure: identical input always yields identical output ordering, except the
// upcoming/past narrowing which takes the reference time as a parameter.
use chrono::{DateTime, Utc};

use crate::models::{Hackathon, ServiceError, Team, User};

// Anything that can be matched by free text and tags
pub trait Searchable {
    fn text_fields(&self) -> Vec<&str>;
    fn tags(&self) -> &[String];
}

impl Searchable for Hackathon {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for Team {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for User {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.bio]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

// Time-window tab for hackathon listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeTab {
    #[default]
    All,
    Upcoming,
    Past,
}

impl TimeTab {
    pub fn parse(value: &str) -> Result<Self, ServiceError> {
        match value {
            "" | "all" => Ok(TimeTab::All),
            "upcoming" => Ok(TimeTab::Upcoming),
            "past" => Ok(TimeTab::Past),
            other => Err(ServiceError::BadRequest(format!(
                "Invalid tab: {}. Must be 'all', 'upcoming' or 'past'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeTab::All => "all",
            TimeTab::Upcoming => "upcoming",
            TimeTab::Past => "past",
        }
    }
}

// An item matches when the query is empty or case-insensitively contained in
// any text field or tag, AND the tag filter is empty or any item tag is
// exactly in the filter set.
pub fn matches<T: Searchable>(item: &T, query: &str, tag_filters: &[String]) -> bool {
    let matches_query = query.is_empty() || {
        let needle = query.to_lowercase();
        item.text_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
            || item
                .tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    };

    let matches_filters =
        tag_filters.is_empty() || item.tags().iter().any(|tag| tag_filters.contains(tag));

    matches_query && matches_filters
}

// Filter a collection, preserving its order
pub fn filter_collection<T: Searchable + Clone>(
    items: &[T],
    query: &str,
    tag_filters: &[String],
) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches(*item, query, tag_filters))
        .cloned()
        .collect()
}

// A hackathon starting exactly at `now` is neither upcoming nor past
pub fn in_tab(hackathon: &Hackathon, tab: TimeTab, now: DateTime<Utc>) -> bool {
    match tab {
        TimeTab::All => true,
        TimeTab::Upcoming => hackathon.start_date > now,
        TimeTab::Past => hackathon.start_date < now,
    }
}

pub fn search_hackathons(
    hackathons: &[Hackathon],
    query: &str,
    tag_filters: &[String],
    tab: TimeTab,
    now: DateTime<Utc>,
) -> Vec<Hackathon> {
    hackathons
        .iter()
        .filter(|h| matches(*h, query, tag_filters) && in_tab(h, tab, now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamSize;
    use chrono::Duration;

    fn hackathon(name: &str, description: &str, tags: &[&str], start: DateTime<Utc>) -> Hackathon {
        Hackathon {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: description.to_string(),
            start_date: start,
            end_date: start + Duration::days(2),
            location: "Online".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_url: String::new(),
            organizer_name: "Org".to_string(),
            organizer_logo: String::new(),
            team_size: TeamSize { min: 2, max: 5 },
            website: None,
            prizes: None,
            schedule: None,
        }
    }

    fn fixture(now: DateTime<Utc>) -> Vec<Hackathon> {
        vec![
            hackathon(
                "Global AI Innovation",
                "Build next generation models",
                &["AI", "ML"],
                now + Duration::days(30),
            ),
            hackathon(
                "EcoTech Challenge",
                "Green technology for the planet",
                &["EcoTech", "IoT"],
                now + Duration::days(60),
            ),
            hackathon(
                "Health Hack",
                "Practical tools for clinics",
                &["Health", "Mobile"],
                now - Duration::days(90),
            ),
        ]
    }

    #[test]
    fn query_matches_name_description_and_tags_case_insensitively() {
        let now = Utc::now();
        let all = fixture(now);

        // "ai" appears in the first name and tag set, and nowhere else
        let by_name = search_hackathons(&all, "ai", &[], TimeTab::All, now);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Global AI Innovation");

        let by_description = search_hackathons(&all, "GREEN", &[], TimeTab::All, now);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "EcoTech Challenge");

        let by_tag = search_hackathons(&all, "iot", &[], TimeTab::All, now);
        assert_eq!(by_tag.len(), 1);
    }

    #[test]
    fn empty_query_and_filters_match_everything_in_order() {
        let now = Utc::now();
        let all = fixture(now);

        let result = search_hackathons(&all, "", &[], TimeTab::All, now);
        assert_eq!(result.len(), 3);
        let names: Vec<_> = result.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Global AI Innovation", "EcoTech Challenge", "Health Hack"]
        );
    }

    #[test]
    fn tag_filters_are_exact_and_any_of() {
        let now = Utc::now();
        let all = fixture(now);

        let filters = vec!["ML".to_string(), "Health".to_string()];
        let result = search_hackathons(&all, "", &filters, TimeTab::All, now);
        assert_eq!(result.len(), 2);

        // Tag filters are exact matches, unlike the free-text query
        let lowercase = vec!["ml".to_string()];
        assert!(search_hackathons(&all, "", &lowercase, TimeTab::All, now).is_empty());
    }

    #[test]
    fn query_and_filters_combine_with_logical_and() {
        let now = Utc::now();
        let all = fixture(now);

        let filters = vec!["EcoTech".to_string()];
        // Query matches the first hackathon, filter matches the second: nothing passes both
        let result = search_hackathons(&all, "models", &filters, TimeTab::All, now);
        assert!(result.is_empty());

        let result = search_hackathons(&all, "planet", &filters, TimeTab::All, now);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn tabs_split_strictly_around_now() {
        let now = Utc::now();
        let all = fixture(now);

        let upcoming = search_hackathons(&all, "", &[], TimeTab::Upcoming, now);
        assert_eq!(upcoming.len(), 2);

        let past = search_hackathons(&all, "", &[], TimeTab::Past, now);
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].name, "Health Hack");
    }

    #[test]
    fn hackathon_starting_exactly_now_is_in_neither_bucket() {
        let now = Utc::now();
        let boundary = vec![hackathon("Boundary", "starts right now", &[], now)];

        assert!(search_hackathons(&boundary, "", &[], TimeTab::Upcoming, now).is_empty());
        assert!(search_hackathons(&boundary, "", &[], TimeTab::Past, now).is_empty());
        assert_eq!(search_hackathons(&boundary, "", &[], TimeTab::All, now).len(), 1);
    }

    #[test]
    fn teams_and_users_share_the_same_matcher() {
        let user = crate::models::User::new(
            "Sam Wilson".to_string(),
            "sam@example.com".to_string(),
            "hash".to_string(),
        );
        assert!(matches(&user, "sam", &[]));
        assert!(!matches(&user, "taylor", &[]));

        let mut tagged = user.clone();
        tagged.tags = vec!["Rust".to_string()];
        assert!(matches(&tagged, "rust", &[]));
        assert!(matches(&tagged, "", &["Rust".to_string()]));
        assert!(!matches(&tagged, "", &["Go".to_string()]));
    }

    #[test]
    fn parse_tab_rejects_unknown_values() {
        assert_eq!(TimeTab::parse("upcoming").ok(), Some(TimeTab::Upcoming));
        assert_eq!(TimeTab::parse("").ok(), Some(TimeTab::All));
        assert!(TimeTab::parse("soon").is_err());
    }
}
