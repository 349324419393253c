use ads_client::{GoogleAdsClient, SecretStore};
use iced::widget::{
    button, column, container, pick_list, row, scrollable, slider, text, text_input, Column,
};
use iced::{Command, Element, Length, Theme};
use keywordscout_core::{
    country_names, parse_seed_keywords, to_csv, CoreError, ErrorExt, KeywordQuery, KeywordRecord,
    CSV_FILE_NAME, DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT, MIN_RESULT_LIMIT, RESULT_LIMIT_STEP,
};
use std::path::PathBuf;
use tracing::info;

/// Secret store location, relative to the working directory.
pub const SECRETS_FILE: &str = "secrets.toml";

#[derive(Debug, Clone)]
pub enum Message {
    UrlInputChanged(String),
    SeedInputChanged(String),
    ResultLimitChanged(u32),
    CountrySelected(&'static str),
    Generate,
    IdeasFetched(Result<Vec<KeywordRecord>, String>),
    ExportCsv,
}

#[derive(Debug, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<KeywordRecord>),
    Failed(String),
}

pub struct App {
    url_input: String,
    seed_input: String,
    result_limit: u32,
    country: &'static str,
    state: FetchState,
    export_status: Option<String>,
    secrets_path: PathBuf,
    export_dir: PathBuf,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            url_input: String::new(),
            seed_input: String::new(),
            result_limit: DEFAULT_RESULT_LIMIT,
            country: country_names()[0],
            state: FetchState::default(),
            export_status: None,
            secrets_path: PathBuf::from(SECRETS_FILE),
            export_dir: PathBuf::from("."),
        }
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UrlInputChanged(value) => {
                self.url_input = value;
                Command::none()
            }
            Message::SeedInputChanged(value) => {
                self.seed_input = value;
                Command::none()
            }
            Message::ResultLimitChanged(value) => {
                self.result_limit = value;
                Command::none()
            }
            Message::CountrySelected(country) => {
                self.country = country;
                Command::none()
            }
            Message::Generate => {
                // One fetch at a time; a second Generate must not overlap
                // the one in flight.
                if matches!(self.state, FetchState::Loading) {
                    return Command::none();
                }
                // The trigger is gated on a non-empty URL field; guard anyway
                // so a stray message never starts a fetch.
                let query = match KeywordQuery::new(
                    self.url_input.trim(),
                    parse_seed_keywords(&self.seed_input),
                    self.country,
                    self.result_limit as usize,
                ) {
                    Ok(query) => query,
                    Err(_) => return Command::none(),
                };

                self.state = FetchState::Loading;
                self.export_status = None;
                Command::perform(
                    fetch_keywords(self.secrets_path.clone(), query),
                    Message::IdeasFetched,
                )
            }
            Message::IdeasFetched(Ok(records)) => {
                info!("Received {} keyword records", records.len());
                self.state = FetchState::Loaded(records);
                Command::none()
            }
            Message::IdeasFetched(Err(message)) => {
                self.state = FetchState::Failed(message);
                Command::none()
            }
            Message::ExportCsv => {
                if let FetchState::Loaded(records) = &self.state {
                    let path = self.export_dir.join(CSV_FILE_NAME);
                    self.export_status = Some(match std::fs::write(&path, to_csv(records)) {
                        Ok(()) => {
                            info!("Exported {} records to {}", records.len(), path.display());
                            format!("Saved {}", path.display())
                        }
                        Err(e) => CoreError::Io(e).log_error().user_friendly_message(),
                    });
                }
                Command::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message, Theme> {
        let heading: Element<Message, Theme> = column![
            text("Keywordscout - Long-Tail Keyword Research").size(24),
            text(
                "Enter a concept name or landing page URL to get long-tail keywords \
                 with CPC, competition, and search volume."
            )
            .size(14)
        ]
        .spacing(5)
        .into();

        let form: Element<Message, Theme> = column![
            text_input("Enter URL or concept name", &self.url_input)
                .on_input(Message::UrlInputChanged),
            text_input(
                "Optional: comma-separated seed keywords (e.g. eco office, green workspace)",
                &self.seed_input
            )
            .on_input(Message::SeedInputChanged),
            row![
                text(format!("Keywords: {}", self.result_limit)).size(14),
                slider(
                    MIN_RESULT_LIMIT..=MAX_RESULT_LIMIT,
                    self.result_limit,
                    Message::ResultLimitChanged
                )
                .step(RESULT_LIMIT_STEP),
            ]
            .spacing(10),
            row![
                text("Target country").size(14),
                pick_list(
                    country_names(),
                    Some(self.country),
                    Message::CountrySelected
                ),
            ]
            .spacing(10),
            button("Generate Keywords").on_press_maybe(
                (!self.url_input.trim().is_empty()
                    && !matches!(self.state, FetchState::Loading))
                .then_some(Message::Generate)
            ),
        ]
        .spacing(10)
        .into();

        let results: Element<Message, Theme> = match &self.state {
            FetchState::Idle => text("Enter a URL or concept to get started").size(14).into(),
            FetchState::Loading => text("Fetching keyword ideas...").size(14).into(),
            FetchState::Failed(message) => text(format!("Error: {message}")).size(14).into(),
            FetchState::Loaded(records) => {
                if records.is_empty() {
                    text("No long-tail keywords found for this seed")
                        .size(14)
                        .into()
                } else {
                    let mut rows = Column::new().spacing(2);
                    rows = rows.push(table_row(
                        "Keyword",
                        "CPC (USD)",
                        "Competition",
                        "Monthly Searches",
                    ));
                    for record in records {
                        rows = rows.push(table_row(
                            &record.keyword,
                            &format!("{:.2}", record.cpc_usd),
                            &record.competition.to_string(),
                            &record.monthly_searches.to_string(),
                        ));
                    }

                    let mut section = column![
                        text(format!("{} keywords", records.len())).size(14),
                        scrollable(rows).height(Length::Fill),
                        button("Download CSV").on_press(Message::ExportCsv),
                    ]
                    .spacing(10);
                    if let Some(status) = &self.export_status {
                        section = section.push(text(status).size(12));
                    }
                    section.into()
                }
            }
        };

        let main_content: Element<Message, Theme> =
            column![heading, form, container(results).padding(10)]
                .spacing(20)
                .into();

        container(main_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }
}

fn table_row<'a>(
    keyword: &str,
    cpc: &str,
    competition: &str,
    searches: &str,
) -> Element<'a, Message, Theme> {
    row![
        text(keyword.to_string()).width(Length::FillPortion(3)),
        text(cpc.to_string()).width(Length::FillPortion(1)),
        text(competition.to_string()).width(Length::FillPortion(1)),
        text(searches.to_string()).width(Length::FillPortion(1)),
    ]
    .spacing(10)
    .into()
}

/// One full fetch action: load secrets, materialize the credential file for
/// client construction, drop it, then run the single upstream call. Errors
/// collapse to the one user-visible message string.
async fn fetch_keywords(
    secrets_path: PathBuf,
    query: KeywordQuery,
) -> Result<Vec<KeywordRecord>, String> {
    run_fetch(secrets_path, query).await.map_err(|e| {
        e.log_error();
        e.user_friendly_message()
    })
}

async fn run_fetch(
    secrets_path: PathBuf,
    query: KeywordQuery,
) -> Result<Vec<KeywordRecord>, CoreError> {
    let store = SecretStore::load(&secrets_path)?;
    let credentials = store.google_ads().clone();

    // Credential file lives only for client construction.
    let client = {
        let materialized = credentials.materialize()?;
        GoogleAdsClient::from_storage(materialized.path())?
    };

    let customer_id = client.login_customer_id().to_string();
    client.generate_keyword_ideas(&customer_id, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use keywordscout_core::Competition;

    fn loaded_app(records: Vec<KeywordRecord>) -> App {
        let mut app = App::new();
        app.state = FetchState::Loaded(records);
        app
    }

    fn sample_record() -> KeywordRecord {
        KeywordRecord {
            keyword: "best eco office chairs".to_string(),
            cpc_usd: 1.5,
            competition: Competition::High,
            monthly_searches: 880,
        }
    }

    #[test]
    fn test_form_defaults() {
        let app = App::new();
        assert_eq!(app.result_limit, 300);
        assert_eq!(app.country, "United States");
        assert!(app.url_input.is_empty());
        assert!(matches!(app.state, FetchState::Idle));
    }

    #[test]
    fn test_input_messages_update_form() {
        let mut app = App::new();
        let _ = app.update(Message::UrlInputChanged("example.com".to_string()));
        let _ = app.update(Message::SeedInputChanged("eco office, green workspace".to_string()));
        let _ = app.update(Message::ResultLimitChanged(500));
        let _ = app.update(Message::CountrySelected("India"));

        assert_eq!(app.url_input, "example.com");
        assert_eq!(app.seed_input, "eco office, green workspace");
        assert_eq!(app.result_limit, 500);
        assert_eq!(app.country, "India");
    }

    #[test]
    fn test_generate_with_empty_url_does_not_start_fetch() {
        let mut app = App::new();
        let _ = app.update(Message::Generate);
        assert!(matches!(app.state, FetchState::Idle));
    }

    #[test]
    fn test_generate_enters_loading_state() {
        let mut app = App::new();
        let _ = app.update(Message::UrlInputChanged("example.com".to_string()));
        let _ = app.update(Message::Generate);
        assert!(matches!(app.state, FetchState::Loading));
    }

    #[test]
    fn test_generate_while_loading_does_not_start_second_fetch() {
        let mut app = App::new();
        let _ = app.update(Message::UrlInputChanged("example.com".to_string()));
        let _ = app.update(Message::Generate);
        assert!(matches!(app.state, FetchState::Loading));

        // A started fetch clears the export status; a second Generate while
        // one is in flight must leave everything untouched.
        app.export_status = Some("Saved keywords.csv".to_string());
        let _ = app.update(Message::Generate);
        assert!(matches!(app.state, FetchState::Loading));
        assert_eq!(app.export_status.as_deref(), Some("Saved keywords.csv"));
    }

    #[test]
    fn test_fetch_failure_shows_single_error() {
        let mut app = App::new();
        let _ = app.update(Message::IdeasFetched(Err(
            "Google Ads quota exceeded: daily limit".to_string(),
        )));
        match &app.state {
            FetchState::Failed(message) => assert!(message.contains("daily limit")),
            other => panic!("expected Failed state, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_success_stores_records() {
        let mut app = App::new();
        let _ = app.update(Message::IdeasFetched(Ok(vec![sample_record()])));
        match &app.state {
            FetchState::Loaded(records) => assert_eq!(records.len(), 1),
            other => panic!("expected Loaded state, got {other:?}"),
        }
    }

    #[test]
    fn test_export_writes_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(vec![sample_record()]);
        app.export_dir = dir.path().to_path_buf();

        let _ = app.update(Message::ExportCsv);

        let path = dir.path().join(CSV_FILE_NAME);
        assert!(path.exists());
        let contents = std::fs::read_to_string(path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Keyword,CPC (USD),Competition,Monthly Searches"
        );
        assert_eq!(lines.next().unwrap(), "best eco office chairs,1.50,HIGH,880");
        assert!(app.export_status.unwrap().contains(CSV_FILE_NAME));
    }

    #[test]
    fn test_export_without_results_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.export_dir = dir.path().to_path_buf();

        let _ = app.update(Message::ExportCsv);

        assert!(!dir.path().join(CSV_FILE_NAME).exists());
        assert!(app.export_status.is_none());
    }
}
