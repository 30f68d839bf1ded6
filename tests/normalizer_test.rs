#[cfg(test)]
mod tests {

    use std::collections::BTreeMap;

    use letterboxd2json::{
        extractors::provider_extractor::ProviderExtractor,
        model::{
            diary::UNKNOWN_DATE,
            provider::{ProviderKind, WatchProvider},
            raw::{
                RawDate, RawDiary, RawDiaryActions, RawDiaryEntry, RawFilmRef, RawFilmReview,
                RawFilmSearch, RawFilmSearchResult, RawGenre, RawList, RawListFilm, RawListSearch,
                RawListSearchResult, RawMember, RawMovie, RawPerson, RawRecentDiary,
                RawReviewedFilm, RawUser, RawUserReview, RawUserStats, RawWatchlist,
            },
        },
        normalizers::{
            diary::normalize_diary,
            list::normalize_list,
            movie::normalize_movie,
            search::{normalize_list_search, normalize_movie_search},
            user::{normalize_user, recent_films, UserSections},
            watchlist::normalize_watchlist,
        },
    };

    fn diary_entry(id: &str, name: &str, date: Option<(i32, u32, u32)>, rating: Option<u8>) -> RawDiaryEntry {
        RawDiaryEntry {
            id: id.to_string(),
            name: Some(name.to_string()),
            release: Some(2000),
            slug: Some(name.to_lowercase()),
            date: date.map(|(year, month, day)| RawDate {
                year: Some(year),
                month: Some(month),
                day: Some(day),
            }),
            actions: Some(RawDiaryActions {
                rating,
                rewatched: None,
            }),
        }
    }

    fn film(name: &str) -> RawFilmRef {
        RawFilmRef {
            name: Some(name.to_string()),
            ..RawFilmRef::default()
        }
    }

    fn provider(name: &str, kind: ProviderKind) -> WatchProvider {
        WatchProvider {
            name: name.to_string(),
            kind,
            link: format!("https://{}.example/{:?}", name.to_lowercase(), kind),
        }
    }

    #[test]
    fn diary_sorts_newest_first_with_unknown_dates_last() {
        let diary = RawDiary {
            entries: vec![
                diary_entry("1", "Undated", None, None),
                diary_entry("2", "Old", Some((2021, 6, 1)), Some(7)),
                diary_entry("3", "Invalid", Some((2023, 2, 30)), Some(4)),
                diary_entry("4", "New", Some((2024, 1, 9)), Some(10)),
            ],
        };

        let entries = normalize_diary(diary);

        let order: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(order, vec!["New", "Old", "Undated", "Invalid"]);
        assert_eq!(entries[0].watch_date, "2024-01-09");
        assert_eq!(entries[0].rating, 5.0);
        assert_eq!(entries[1].rating, 3.5);
        assert_eq!(entries[2].watch_date, UNKNOWN_DATE);
        assert_eq!(entries[2].rating, 0.0);
        assert_eq!(entries[3].watch_date, UNKNOWN_DATE);
    }

    #[test]
    fn diary_defaults_missing_fields() {
        let diary = RawDiary {
            entries: vec![RawDiaryEntry {
                id: "9".to_string(),
                ..RawDiaryEntry::default()
            }],
        };

        let entry = &normalize_diary(diary)[0];

        assert_eq!(entry.title, "Untitled");
        assert_eq!(entry.year, 0);
        assert_eq!(entry.slug, "");
        assert!(!entry.rewatch);
        assert_eq!(entry.watch_date, UNKNOWN_DATE);
    }

    #[test]
    fn unavailable_watchlist_is_empty() {
        let watchlist = RawWatchlist {
            available: false,
            data: vec![film("Heat")],
        };
        assert!(normalize_watchlist(watchlist).is_empty());

        let watchlist = RawWatchlist {
            available: true,
            data: vec![RawFilmRef::default()],
        };
        let items = normalize_watchlist(watchlist);
        assert_eq!(items[0].title, "Untitled");
        assert_eq!(items[0].year, 0);
    }

    #[test]
    fn movie_details_apply_defaults_and_limits() {
        let mut crew = BTreeMap::new();
        crew.insert(
            "writer".to_string(),
            vec![RawPerson {
                name: Some("Someone".to_string()),
            }],
        );
        let movie = RawMovie {
            title: Some("Heat".to_string()),
            year: Some(1995),
            crew,
            genres: vec![
                RawGenre {
                    name: Some("Crime".to_string()),
                    kind: Some("genre".to_string()),
                },
                RawGenre {
                    name: Some("Heists".to_string()),
                    kind: Some("theme".to_string()),
                },
            ],
            popular_reviews: (0..7)
                .map(|i| RawFilmReview {
                    username: Some(format!("user{}", i)),
                    review: Some(format!("  review {}\n", i)),
                    rating: Some("★★★½".to_string()),
                })
                .collect(),
            runtime: Some(170),
            cast: (0..8)
                .map(|i| RawPerson {
                    name: Some(format!("Actor {}", i)),
                })
                .collect(),
            similar: vec![RawFilmRef {
                name: Some("Thief".to_string()),
                average_rating: Some(3.9),
                ..RawFilmRef::default()
            }],
            ..RawMovie::default()
        };

        let details = normalize_movie(movie, vec![provider("Netflix", ProviderKind::Stream)]);

        assert_eq!(details.director, "Unknown");
        assert_eq!(details.genres, vec!["Crime"]);
        assert_eq!(details.reviews.len(), 5);
        assert_eq!(details.reviews[0].text, "review 0");
        assert_eq!(details.reviews[0].rating, 3.5);
        assert_eq!(details.cast.len(), 5);
        assert_eq!(details.runtime.as_deref(), Some("2h 50min"));
        assert_eq!(details.rating, 0.0);
        assert_eq!(details.members, 0);
        assert_eq!(details.tagline, None);
        assert_eq!(details.similar[0].name, "Thief");
        assert_eq!(details.similar[0].rating, 3.9);
        assert_eq!(details.providers.len(), 1);
    }

    #[test]
    fn stream_entry_overrides_earlier_provider() {
        let providers = ProviderExtractor::dedupe_providers(vec![
            provider("Netflix", ProviderKind::Buy),
            provider("Apple TV", ProviderKind::Rent),
            provider("Netflix", ProviderKind::Stream),
            provider("Apple TV", ProviderKind::Buy),
        ]);

        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].name, "Netflix");
        assert_eq!(providers[0].kind, ProviderKind::Stream);
        assert_eq!(providers[1].name, "Apple TV");
        assert_eq!(providers[1].kind, ProviderKind::Rent);
    }

    #[test]
    fn provider_titles_are_classified() {
        assert_eq!(ProviderExtractor::provider_kind("Watch Heat on Netflix"), ProviderKind::Stream);
        assert_eq!(ProviderExtractor::provider_kind("RENT Heat on Amazon"), ProviderKind::Rent);
        assert_eq!(ProviderExtractor::provider_kind("Heat on Mubi"), ProviderKind::Unknown);
        assert_eq!(
            ProviderExtractor::provider_name("Watch Heat on JioHotstar").as_deref(),
            Some("Disney+ Hotstar")
        );
        assert_eq!(ProviderExtractor::provider_name("Heat"), None);
        assert_eq!(
            ProviderExtractor::unwrap_redirect("https://www.example.com/?r=https%3A%2F%2Fnetflix.com"),
            "https://www.example.com/?r=https%3A%2F%2Fnetflix.com"
        );
    }

    #[test]
    fn blank_redirect_target_keeps_tracking_link() {
        let tracking = "https://click.justwatch.com/a?cx=abc&r=&uct_country=us";
        assert_eq!(ProviderExtractor::unwrap_redirect(tracking), tracking);

        assert_eq!(
            ProviderExtractor::unwrap_redirect(
                "https://click.justwatch.com/a?r=&r=https%3A%2F%2Fwww.netflix.com%2Ftitle%2F1"
            ),
            "https://www.netflix.com/title/1"
        );
    }

    #[test]
    fn list_movies_take_slug_from_url() {
        let list = RawList {
            movies: vec![
                RawListFilm {
                    name: Some("Heat".to_string()),
                    year: Some(1995),
                    url: Some("https://letterboxd.com/film/heat-1995/".to_string()),
                    director: None,
                },
                RawListFilm::default(),
            ],
        };

        let movies = normalize_list(list);

        assert_eq!(movies[0].slug, "heat-1995");
        assert_eq!(movies[0].director, "N/A");
        assert_eq!(movies[1].title, "Untitled");
        assert_eq!(movies[1].slug, "");
    }

    #[test]
    fn movie_search_returns_at_most_five() {
        let search = RawFilmSearch {
            results: (0..8)
                .map(|i| RawFilmSearchResult {
                    name: Some(format!("Film {}", i)),
                    year: Some(2000 + i),
                    slug: if i == 1 { None } else { Some(format!("film-{}", i)) },
                    directors: vec![],
                })
                .collect(),
        };

        let results = normalize_movie_search(search);

        assert_eq!(results.len(), 5);
        assert_eq!(results[1].slug, "film-2");
        assert_eq!(results[0].director, "N/A");
    }

    #[test]
    fn list_search_applies_defaults() {
        let search = RawListSearch {
            available: true,
            results: vec![RawListSearchResult::default()],
        };
        let results = normalize_list_search(search);
        assert_eq!(results[0].name, "Untitled List");
        assert_eq!(results[0].owner, "N/A");
        assert_eq!(results[0].slug, "");

        assert!(normalize_list_search(RawListSearch::default()).is_empty());
    }

    #[test]
    fn recent_films_walk_months_and_days_newest_first() {
        let mut diary = RawRecentDiary::default();
        diary
            .months
            .entry((2023, 12))
            .or_default()
            .insert(31, vec![film("New Year's Eve")]);
        let january = diary.months.entry((2024, 1)).or_default();
        january.insert(2, vec![film("Second"), film("Second Again")]);
        january.insert(10, vec![RawFilmRef::default(), film("Tenth")]);

        assert_eq!(
            recent_films(&diary),
            vec!["Tenth", "Second", "Second Again", "New Year's Eve"]
        );
    }

    #[test]
    fn user_profile_uses_defaults_for_empty_sections() {
        let user = RawUser {
            username: "someone".to_string(),
            favorites: vec![RawFilmRef::default()],
            stats: RawUserStats {
                this_year: Some(12),
                ..RawUserStats::default()
            },
            ..RawUser::default()
        };
        let sections = UserSections {
            followers: vec![RawMember::default()],
            reviews: vec![
                RawUserReview {
                    movie: Some(RawReviewedFilm {
                        name: Some("Heat".to_string()),
                        release: Some(1995),
                    }),
                    rating: Some(9),
                    content: Some("Great.".to_string()),
                    date: Some(RawDate {
                        year: Some(2024),
                        month: Some(2),
                        day: Some(9),
                    }),
                },
                RawUserReview {
                    movie: Some(RawReviewedFilm::default()),
                    content: None,
                    ..RawUserReview::default()
                },
            ],
            ..UserSections::default()
        };

        let profile = normalize_user(user, sections);

        assert_eq!(profile.last_watched, "N/A");
        assert!(profile.recent.is_empty());
        assert_eq!(profile.films_watched, 0);
        assert_eq!(profile.this_year, 12);
        assert_eq!(profile.followers, vec!["Unknown"]);
        assert_eq!(profile.favorites, vec!["Untitled"]);
        assert_eq!(profile.reviews.len(), 1);
        assert_eq!(profile.reviews[0].rating, 4.5);
        assert_eq!(profile.reviews[0].review_date, "2024-02-09");
    }
}
