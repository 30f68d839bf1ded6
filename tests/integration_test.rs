#[cfg(test)]
mod tests {

    use async_trait::async_trait;
    use serde_json::Value;

    use letterboxd2json::{
        commands,
        error::FetchError,
        model::{
            provider::{ProviderKind, WatchProvider},
            raw::{
                RawDate, RawDiary, RawDiaryActions, RawDiaryEntry, RawFilmRef, RawFilmSearch,
                RawFilmSearchResult, RawList, RawListFilm, RawListSearch, RawListSearchResult,
                RawMember, RawMovie, RawPerson, RawRecentDiary, RawUser, RawUserReview,
                RawUserStats, RawWatchlist,
            },
        },
        output::{to_json, ErrorPayload},
        source::{LetterboxdSource, WatchProviderSource},
    };

    /// In-memory Letterboxd. A `None` section answers with a 404.
    #[derive(Default)]
    struct FakeLetterboxd {
        diary: Option<RawDiary>,
        watchlist: Option<RawWatchlist>,
        movie: Option<RawMovie>,
        list: Option<RawList>,
        film_search: Option<RawFilmSearch>,
        list_search: Option<RawListSearch>,
        user: Option<RawUser>,
        recent_diary: Option<RawRecentDiary>,
        followers: Option<Vec<RawMember>>,
        following: Option<Vec<RawMember>>,
        film_count: Option<Option<u64>>,
        user_reviews: Option<Vec<RawUserReview>>,
    }

    fn not_found(path: &str) -> FetchError {
        FetchError::NotFound {
            url: format!("https://letterboxd.com/{}/", path),
        }
    }

    fn answer<T: Clone>(section: &Option<T>, path: &str) -> Result<T, FetchError> {
        section.clone().ok_or_else(|| not_found(path))
    }

    #[async_trait]
    impl LetterboxdSource for FakeLetterboxd {
        async fn diary(&self, username: &str) -> Result<RawDiary, FetchError> {
            answer(&self.diary, username)
        }

        async fn watchlist(&self, username: &str) -> Result<RawWatchlist, FetchError> {
            answer(&self.watchlist, username)
        }

        async fn movie(&self, slug: &str) -> Result<RawMovie, FetchError> {
            answer(&self.movie, &format!("film/{}", slug))
        }

        async fn list(&self, owner: &str, slug: &str) -> Result<RawList, FetchError> {
            answer(&self.list, &format!("{}/list/{}", owner, slug))
        }

        async fn search_films(&self, _query: &str, max: usize) -> Result<RawFilmSearch, FetchError> {
            let mut search = answer(&self.film_search, "s/search/films")?;
            search.results.truncate(max);
            Ok(search)
        }

        async fn search_lists(&self, _query: &str) -> Result<RawListSearch, FetchError> {
            answer(&self.list_search, "s/search/lists")
        }

        async fn user(&self, username: &str) -> Result<RawUser, FetchError> {
            answer(&self.user, username)
        }

        async fn recent_diary(&self, username: &str) -> Result<RawRecentDiary, FetchError> {
            answer(&self.recent_diary, username)
        }

        async fn followers(&self, username: &str) -> Result<Vec<RawMember>, FetchError> {
            answer(&self.followers, &format!("{}/followers", username))
        }

        async fn following(&self, username: &str) -> Result<Vec<RawMember>, FetchError> {
            answer(&self.following, &format!("{}/following", username))
        }

        async fn film_count(&self, username: &str) -> Result<Option<u64>, FetchError> {
            answer(&self.film_count, username)
        }

        async fn user_reviews(&self, username: &str) -> Result<Vec<RawUserReview>, FetchError> {
            answer(&self.user_reviews, &format!("{}/films/reviews", username))
        }
    }

    struct FakeProviders(Vec<WatchProvider>);

    #[async_trait]
    impl WatchProviderSource for FakeProviders {
        async fn watch_providers(&self, _slug: &str) -> Vec<WatchProvider> {
            self.0.clone()
        }
    }

    fn film(name: &str, slug: &str) -> RawFilmRef {
        RawFilmRef {
            name: Some(name.to_string()),
            slug: Some(slug.to_string()),
            ..RawFilmRef::default()
        }
    }

    fn member(name: &str) -> RawMember {
        RawMember {
            username: Some(name.to_lowercase()),
            name: Some(name.to_string()),
        }
    }

    /// Parses the printed document and checks it is `{"error": <message>}` and nothing else.
    fn assert_error_document(json: &str, message: &str) {
        let value: Value = serde_json::from_str(json).expect("valid json");
        let object = value.as_object().expect("error document is an object");
        assert_eq!(object.len(), 1);
        assert_eq!(object["error"], message);
    }

    #[tokio::test]
    async fn diary_failure_becomes_single_error_object() {
        let source = FakeLetterboxd::default();

        let err = commands::get_diary(&source, "ghost")
            .await
            .expect_err("diary is missing");

        assert_error_document(
            &to_json(&ErrorPayload::new(err.to_string())).expect("serializes"),
            "Failed to fetch diary for 'ghost'. Exception: 404 page not found: https://letterboxd.com/ghost/",
        );
    }

    #[tokio::test]
    async fn diary_is_normalized_and_sorted() {
        let source = FakeLetterboxd {
            diary: Some(RawDiary {
                entries: vec![
                    RawDiaryEntry {
                        id: "1".to_string(),
                        name: Some("Alien".to_string()),
                        ..RawDiaryEntry::default()
                    },
                    RawDiaryEntry {
                        id: "2".to_string(),
                        name: Some("Heat".to_string()),
                        release: Some(1995),
                        slug: Some("heat-1995".to_string()),
                        date: Some(RawDate {
                            year: Some(2024),
                            month: Some(3),
                            day: Some(2),
                        }),
                        actions: Some(RawDiaryActions {
                            rating: Some(7),
                            rewatched: Some(true),
                        }),
                    },
                ],
            }),
            ..FakeLetterboxd::default()
        };

        let entries = commands::get_diary(&source, "someone").await.expect("diary");
        let json: Value = serde_json::from_str(&to_json(&entries).expect("serializes")).expect("valid json");

        assert_eq!(
            json,
            serde_json::json!([
                {
                    "title": "Heat",
                    "year": 1995,
                    "rating": 3.5,
                    "watch_date": "2024-03-02",
                    "rewatch": true,
                    "slug": "heat-1995"
                },
                {
                    "title": "Alien",
                    "year": 0,
                    "rating": 0.0,
                    "watch_date": "Unknown Date",
                    "rewatch": false,
                    "slug": ""
                }
            ])
        );
    }

    #[tokio::test]
    async fn watchlist_failure_names_the_user() {
        let err = commands::get_watchlist(&FakeLetterboxd::default(), "ghost")
            .await
            .expect_err("watchlist is missing");

        assert!(err
            .to_string()
            .starts_with("Failed to fetch watchlist for 'ghost'. Exception: "));
    }

    #[tokio::test]
    async fn movie_details_include_providers() {
        let source = FakeLetterboxd {
            movie: Some(RawMovie {
                title: Some("Parasite".to_string()),
                year: Some(2019),
                crew: [(
                    "director".to_string(),
                    vec![RawPerson {
                        name: Some("Bong Joon Ho".to_string()),
                    }],
                )]
                .into_iter()
                .collect(),
                runtime: Some(132),
                ..RawMovie::default()
            }),
            ..FakeLetterboxd::default()
        };
        let providers = FakeProviders(vec![WatchProvider {
            name: "Netflix".to_string(),
            kind: ProviderKind::Stream,
            link: "https://www.netflix.com/title/81221938".to_string(),
        }]);

        let details = commands::get_movie_details(&source, &providers, "parasite-2019")
            .await
            .expect("movie");
        let json: Value = serde_json::from_str(&to_json(&details).expect("serializes")).expect("valid json");

        assert_eq!(json["director"], "Bong Joon Ho");
        assert_eq!(json["runtime"], "2h 12min");
        assert_eq!(json["tagline"], Value::Null);
        assert_eq!(
            json["providers"],
            serde_json::json!([{
                "name": "Netflix",
                "type": "stream",
                "link": "https://www.netflix.com/title/81221938"
            }])
        );
    }

    #[tokio::test]
    async fn movie_failure_is_the_bare_message() {
        let err = commands::get_movie_details(&FakeLetterboxd::default(), &FakeProviders(vec![]), "nope")
            .await
            .expect_err("movie is missing");

        assert_eq!(err.to_string(), "404 page not found: https://letterboxd.com/film/nope/");
    }

    #[tokio::test]
    async fn list_details_derive_slugs() {
        let source = FakeLetterboxd {
            list: Some(RawList {
                movies: vec![RawListFilm {
                    name: Some("Heat".to_string()),
                    year: Some(1995),
                    url: Some("https://letterboxd.com/film/heat-1995/".to_string()),
                    director: None,
                }],
            }),
            ..FakeLetterboxd::default()
        };

        let movies = commands::get_list_details(&source, "dave", "crime")
            .await
            .expect("list");
        assert_eq!(movies[0].slug, "heat-1995");
        assert_eq!(movies[0].director, "N/A");

        let err = commands::get_list_details(&FakeLetterboxd::default(), "dave", "crime")
            .await
            .expect_err("list is missing");
        assert_eq!(
            err.to_string(),
            "Failed to fetch list 'dave/crime': 404 page not found: https://letterboxd.com/dave/list/crime/"
        );
    }

    #[tokio::test]
    async fn movie_search_caps_results() {
        let source = FakeLetterboxd {
            film_search: Some(RawFilmSearch {
                results: (0..9)
                    .map(|i| RawFilmSearchResult {
                        name: Some(format!("Heat {}", i)),
                        year: Some(1990 + i),
                        slug: Some(format!("heat-{}", i)),
                        directors: vec![],
                    })
                    .collect(),
            }),
            ..FakeLetterboxd::default()
        };

        let results = commands::search_movies(&source, "heat").await.expect("search");
        assert_eq!(results.len(), 5);
    }

    #[tokio::test]
    async fn list_search_maps_results() {
        let source = FakeLetterboxd {
            list_search: Some(RawListSearch {
                available: true,
                results: vec![RawListSearchResult {
                    title: Some("Top 250".to_string()),
                    slug: Some("top-250".to_string()),
                    owner: Some("dave".to_string()),
                }],
            }),
            ..FakeLetterboxd::default()
        };

        let results = commands::search_lists(&source, "top").await.expect("search");
        assert_eq!(results[0].name, "Top 250");
        assert_eq!(results[0].owner, "dave");

        let err = commands::search_lists(&FakeLetterboxd::default(), "top")
            .await
            .expect_err("search is down");
        assert!(err.to_string().starts_with("Failed to search for lists: "));
    }

    #[tokio::test]
    async fn user_details_survive_failing_sections() {
        let mut recent = RawRecentDiary::default();
        recent
            .months
            .entry((2024, 3))
            .or_default()
            .insert(15, vec![film("Parasite", "parasite-2019")]);

        // followers and reviews are left out, as for a private profile
        let source = FakeLetterboxd {
            user: Some(RawUser {
                username: "someone".to_string(),
                bio: Some("Film lover.".to_string()),
                favorites: vec![film("Heat", "heat-1995")],
                stats: RawUserStats {
                    this_year: Some(87),
                    ..RawUserStats::default()
                },
                ..RawUser::default()
            }),
            recent_diary: Some(recent),
            following: Some(vec![member("Alice")]),
            film_count: Some(Some(1024)),
            ..FakeLetterboxd::default()
        };

        let profile = commands::get_user_details(&source, "someone")
            .await
            .expect("profile");

        assert_eq!(profile.username, "someone");
        assert_eq!(profile.films_watched, 1024);
        assert_eq!(profile.following, vec!["Alice"]);
        assert!(profile.followers.is_empty());
        assert!(profile.reviews.is_empty());
        assert_eq!(profile.last_watched, "Parasite");
        assert_eq!(profile.recent, vec!["Parasite"]);
        assert_eq!(profile.favorites, vec!["Heat"]);
        assert_eq!(profile.this_year, 87);
        assert_eq!(profile.website, None);
    }

    #[tokio::test]
    async fn user_details_fail_without_base_profile() {
        let source = FakeLetterboxd {
            followers: Some(vec![member("Alice")]),
            ..FakeLetterboxd::default()
        };

        let err = commands::get_user_details(&source, "ghost")
            .await
            .expect_err("profile is missing");

        assert_eq!(
            err.to_string(),
            "Failed to fetch user 'ghost'. Exception: 404 page not found: https://letterboxd.com/ghost/"
        );
    }
}
