//! Interactive session mode.
//!
//! The session keeps per-action request slots, so retry, regenerate, and
//! save-a-favorite all operate on the state of the last request rather than
//! re-parsing command-line arguments.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use copydesk_domain::{
    ConversionRequest, CopyRequest, ErrorAnalysisRequest, FavoriteCopy, Language, ServiceDomain,
    TextGenerator, Tone, UiComponent,
};
use copydesk_engine::{Engine, SessionState, SlotAction, SlotState};
use copydesk_store::StateStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive session.
pub async fn run_session<G>(
    engine: &Engine<G>,
    store: &mut StateStore,
    formatter: &Formatter,
) -> Result<()>
where
    G: TextGenerator + Send + Sync,
{
    println!(
        "{}",
        formatter.info("Copydesk session - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = Config::history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = Session::new();

    loop {
        match editor.readline("copydesk> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_session_command(line) {
                    Ok(SessionCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(SessionCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = session.execute(cmd, engine, store, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();
    Ok(())
}

/// Commands available inside a session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Copy(CopyRequest),
    Analyze(ErrorAnalysisRequest),
    Convert(ConversionRequest),
    Concept { refresh: bool },
    Retry,
    Save(usize),
    Favorites,
    Theme(Option<String>),
    Status,
    Help,
    Exit,
}

/// The request the user submitted most recently, kept for `retry`.
#[derive(Debug, Clone)]
enum LastRequest {
    Copy(CopyRequest),
    Analyze(ErrorAnalysisRequest),
    Convert(ConversionRequest),
    Concept,
}

/// Session state: the four request slots plus retry bookkeeping.
struct Session {
    state: SessionState,
    last_request: Option<LastRequest>,
}

impl Session {
    fn new() -> Self {
        Self {
            state: SessionState::new(),
            last_request: None,
        }
    }

    async fn execute<G>(
        &mut self,
        cmd: SessionCommand,
        engine: &Engine<G>,
        store: &mut StateStore,
        formatter: &Formatter,
    ) -> Result<()>
    where
        G: TextGenerator + Send + Sync,
    {
        match cmd {
            SessionCommand::Copy(request) => {
                self.run_copy(request, engine, formatter).await?;
            }
            SessionCommand::Analyze(request) => {
                self.run_analyze(request, engine, formatter).await?;
            }
            SessionCommand::Convert(request) => {
                self.run_convert(request, engine, formatter).await?;
            }
            SessionCommand::Concept { refresh } => {
                self.run_concept(refresh, engine, store, formatter).await?;
            }
            SessionCommand::Retry => match self.last_request.clone() {
                Some(LastRequest::Copy(request)) => {
                    self.run_copy(request, engine, formatter).await?;
                }
                Some(LastRequest::Analyze(request)) => {
                    self.run_analyze(request, engine, formatter).await?;
                }
                Some(LastRequest::Convert(request)) => {
                    self.run_convert(request, engine, formatter).await?;
                }
                Some(LastRequest::Concept) => {
                    self.run_concept(true, engine, store, formatter).await?;
                }
                None => {
                    return Err(CliError::InvalidInput(
                        "Nothing to retry yet".to_string(),
                    ));
                }
            },
            SessionCommand::Save(n) => {
                self.save_favorite(n, store, formatter)?;
            }
            SessionCommand::Favorites => {
                println!("{}", formatter.format_favorites(&store.favorites()));
            }
            SessionCommand::Theme(arg) => {
                run_theme(arg, store, formatter)?;
            }
            SessionCommand::Status => {
                self.print_status();
            }
            SessionCommand::Help | SessionCommand::Exit => unreachable!(),
        }

        Ok(())
    }

    async fn run_copy<G>(
        &mut self,
        request: CopyRequest,
        engine: &Engine<G>,
        formatter: &Formatter,
    ) -> Result<()>
    where
        G: TextGenerator + Send + Sync,
    {
        if !self.state.copy.can_submit() {
            return Ok(());
        }
        self.state.copy.apply(SlotAction::Submit);
        self.last_request = Some(LastRequest::Copy(request.clone()));

        match engine.generate_copy(&request).await {
            Ok(response) => {
                println!("{}", formatter.format_copy(&response));
                println!(
                    "{}",
                    formatter.info("Use 'save <n>' to keep a suggestion")
                );
                self.state.copy.apply(SlotAction::Succeeded(response));
            }
            Err(e) => {
                self.state.copy.apply(SlotAction::Failed(e.to_string()));
                return Err(e.into());
            }
        }
        Ok(())
    }

    async fn run_analyze<G>(
        &mut self,
        request: ErrorAnalysisRequest,
        engine: &Engine<G>,
        formatter: &Formatter,
    ) -> Result<()>
    where
        G: TextGenerator + Send + Sync,
    {
        if !self.state.analysis.can_submit() {
            return Ok(());
        }
        self.state.analysis.apply(SlotAction::Submit);
        self.last_request = Some(LastRequest::Analyze(request.clone()));

        match engine.analyze_error(&request).await {
            Ok(response) => {
                println!("{}", formatter.format_analysis(&response));
                self.state.analysis.apply(SlotAction::Succeeded(response));
            }
            Err(e) => {
                self.state.analysis.apply(SlotAction::Failed(e.to_string()));
                return Err(e.into());
            }
        }
        Ok(())
    }

    async fn run_convert<G>(
        &mut self,
        request: ConversionRequest,
        engine: &Engine<G>,
        formatter: &Formatter,
    ) -> Result<()>
    where
        G: TextGenerator + Send + Sync,
    {
        if !self.state.conversion.can_submit() {
            return Ok(());
        }
        self.state.conversion.apply(SlotAction::Submit);
        self.last_request = Some(LastRequest::Convert(request.clone()));

        match engine.convert(&request).await {
            Ok(response) => {
                println!("{}", formatter.format_conversion(&response));
                self.state.conversion.apply(SlotAction::Succeeded(response));
            }
            Err(e) => {
                self.state
                    .conversion
                    .apply(SlotAction::Failed(e.to_string()));
                return Err(e.into());
            }
        }
        Ok(())
    }

    async fn run_concept<G>(
        &mut self,
        refresh: bool,
        engine: &Engine<G>,
        store: &mut StateStore,
        formatter: &Formatter,
    ) -> Result<()>
    where
        G: TextGenerator + Send + Sync,
    {
        if !self.state.concept.can_submit() {
            return Ok(());
        }

        let today = chrono::Local::now().date_naive();
        if !refresh {
            if let Some(concept) = store.daily_concept(today) {
                println!("{}", formatter.format_concept(&concept, true));
                return Ok(());
            }
        }

        self.state.concept.apply(SlotAction::Submit);
        self.last_request = Some(LastRequest::Concept);

        match engine.daily_concept().await {
            Ok(concept) => {
                store.set_daily_concept(&concept, today)?;
                println!("{}", formatter.format_concept(&concept, false));
                self.state.concept.apply(SlotAction::Succeeded(concept));
            }
            Err(e) => {
                self.state.concept.apply(SlotAction::Failed(e.to_string()));
                return Err(e.into());
            }
        }
        Ok(())
    }

    fn save_favorite(
        &self,
        n: usize,
        store: &mut StateStore,
        formatter: &Formatter,
    ) -> Result<()> {
        let SlotState::Done(response) = self.state.copy.state() else {
            return Err(CliError::InvalidInput(
                "Generate copy before saving a favorite".to_string(),
            ));
        };
        let Some(LastRequest::Copy(request)) = &self.last_request else {
            return Err(CliError::InvalidInput(
                "Generate copy before saving a favorite".to_string(),
            ));
        };

        let suggestion = n
            .checked_sub(1)
            .and_then(|i| response.suggestions.get(i))
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "save expects a suggestion number between 1 and {}",
                    response.suggestions.len()
                ))
            })?;

        store.add_favorite(FavoriteCopy::new(request, suggestion.clone()))?;
        println!("{}", formatter.success(&format!("Saved suggestion {}", n)));
        Ok(())
    }

    fn print_status(&self) {
        println!("copy:       {}", slot_label(self.state.copy.state()));
        println!("analysis:   {}", slot_label(self.state.analysis.state()));
        println!("conversion: {}", slot_label(self.state.conversion.state()));
        println!("concept:    {}", slot_label(self.state.concept.state()));
    }
}

fn slot_label<T>(state: &SlotState<T>) -> &'static str {
    match state {
        SlotState::Idle => "idle",
        SlotState::InFlight => "in flight",
        SlotState::Done(_) => "done",
        SlotState::Error(_) => "error",
    }
}

fn run_theme(arg: Option<String>, store: &mut StateStore, formatter: &Formatter) -> Result<()> {
    match arg.as_deref() {
        None => println!("{}", store.theme().as_str()),
        Some("toggle") => {
            let next = store.theme().toggle();
            store.set_theme(next)?;
            println!(
                "{}",
                formatter.success(&format!("Theme set to {}", next.as_str()))
            );
        }
        Some(name) => {
            let theme: copydesk_domain::Theme = name.parse().map_err(|_: String| {
                CliError::InvalidInput(format!(
                    "Unknown theme: {}. Use 'light', 'dark', or 'toggle'.",
                    name
                ))
            })?;
            store.set_theme(theme)?;
            println!(
                "{}",
                formatter.success(&format!("Theme set to {}", theme.as_str()))
            );
        }
    }
    Ok(())
}

/// Parse a session command line.
fn parse_session_command(line: &str) -> Result<SessionCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(SessionCommand::Exit),
        "help" | "?" => Ok(SessionCommand::Help),
        "copy" => parse_copy_command(&parts[1..]),
        "analyze" => parse_analyze_command(&parts[1..]),
        "convert" => parse_convert_command(line, &parts[1..]),
        "concept" => Ok(SessionCommand::Concept {
            refresh: parts.get(1) == Some(&"refresh"),
        }),
        "retry" => Ok(SessionCommand::Retry),
        "save" => parse_save_command(&parts[1..]),
        "favorites" => Ok(SessionCommand::Favorites),
        "theme" => Ok(SessionCommand::Theme(parts.get(1).map(|s| s.to_string()))),
        "status" => Ok(SessionCommand::Status),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

// copy <component> <tone> <service> <detail...>
fn parse_copy_command(args: &[&str]) -> Result<SessionCommand> {
    if args.len() < 4 {
        return Err(CliError::InvalidInput(
            "Usage: copy <component> <tone> <service> <detail...>".to_string(),
        ));
    }

    let component = UiComponent::parse(args[0])
        .ok_or_else(|| CliError::InvalidInput(format!("Invalid component: {}", args[0])))?;
    let tone = Tone::parse(args[1])
        .ok_or_else(|| CliError::InvalidInput(format!("Invalid tone: {}", args[1])))?;
    let service = ServiceDomain::parse(args[2])
        .ok_or_else(|| CliError::InvalidInput(format!("Invalid service: {}", args[2])))?;

    Ok(SessionCommand::Copy(CopyRequest {
        component,
        tone,
        service,
        detail: args[3..].join(" "),
    }))
}

// analyze [lang] <message...>
fn parse_analyze_command(args: &[&str]) -> Result<SessionCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: analyze [ko|en|ja|zh] <message...>".to_string(),
        ));
    }

    let (language, message_parts) = match Language::parse(args[0]) {
        Some(language) if args.len() > 1 => (language, &args[1..]),
        _ => (Language::En, args),
    };

    Ok(SessionCommand::Analyze(ErrorAnalysisRequest {
        error_message: message_parts.join(" "),
        language,
    }))
}

// convert j2t <json...> | convert t2j <definition...>
//
// The payload is taken verbatim from the raw line so JSON whitespace
// survives.
fn parse_convert_command(line: &str, args: &[&str]) -> Result<SessionCommand> {
    let usage = || {
        CliError::InvalidInput(
            "Usage: convert j2t <json> | convert t2j <definition>".to_string(),
        )
    };

    let direction = *args.first().ok_or_else(usage)?;
    let rest = line
        .strip_prefix("convert")
        .unwrap_or(line)
        .trim_start();
    let payload = rest
        .strip_prefix(direction)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(usage)?;

    match direction {
        "j2t" | "json-to-type" => Ok(SessionCommand::Convert(ConversionRequest::JsonToType {
            json: payload.to_string(),
            type_name: None,
        })),
        "t2j" | "type-to-json" => Ok(SessionCommand::Convert(ConversionRequest::TypeToJson {
            definition: payload.to_string(),
        })),
        _ => Err(usage()),
    }
}

fn parse_save_command(args: &[&str]) -> Result<SessionCommand> {
    let n = args
        .first()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| CliError::InvalidInput("Usage: save <n>".to_string()))?;
    Ok(SessionCommand::Save(n))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!("  copy <component> <tone> <service> <detail...>  Generate UX copy");
    println!("  analyze [ko|en|ja|zh] <message...>             Explain an error message");
    println!("  convert j2t <json>                             JSON to type definition");
    println!("  convert t2j <definition>                       Type definition to JSON example");
    println!("  concept [refresh]                              Today's front-end concept");
    println!("  retry                                          Re-run the last request");
    println!("  save <n>                                       Save copy suggestion n");
    println!("  favorites                                      List saved favorites");
    println!("  theme [light|dark|toggle]                      Show or change the theme");
    println!("  status                                         Show request slot states");
    println!("  help                                           Show this help");
    println!("  exit                                           Quit the session");
    println!();
    println!("  components: button, modal, notification, error, info, dialog");
    println!("  tones:      friendly, formal, funny, neutral");
    println!("  services:   delivery, commerce, social, finance, healthcare");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_copy_command() {
        let cmd = parse_session_command("copy button friendly delivery order placed").unwrap();
        match cmd {
            SessionCommand::Copy(request) => {
                assert_eq!(request.component, UiComponent::Button);
                assert_eq!(request.tone, Tone::Friendly);
                assert_eq!(request.service, ServiceDomain::Delivery);
                assert_eq!(request.detail, "order placed");
            }
            _ => panic!("Expected Copy command"),
        }
    }

    #[test]
    fn test_parse_copy_rejects_bad_component() {
        assert!(matches!(
            parse_session_command("copy banner friendly delivery x"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_analyze_with_language() {
        let cmd = parse_session_command("analyze ja TypeError: x is undefined").unwrap();
        match cmd {
            SessionCommand::Analyze(request) => {
                assert_eq!(request.language, Language::Ja);
                assert_eq!(request.error_message, "TypeError: x is undefined");
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_parse_analyze_defaults_to_english() {
        let cmd = parse_session_command("analyze Cannot read properties of null").unwrap();
        match cmd {
            SessionCommand::Analyze(request) => {
                assert_eq!(request.language, Language::En);
                assert_eq!(request.error_message, "Cannot read properties of null");
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_parse_analyze_single_word_is_the_message() {
        // A lone "en" is a message, not a language selector
        let cmd = parse_session_command("analyze en").unwrap();
        match cmd {
            SessionCommand::Analyze(request) => {
                assert_eq!(request.language, Language::En);
                assert_eq!(request.error_message, "en");
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_parse_convert_keeps_payload_verbatim() {
        let cmd = parse_session_command("convert j2t {\"id\": 1,  \"name\": \"a\"}").unwrap();
        match cmd {
            SessionCommand::Convert(ConversionRequest::JsonToType { json, type_name }) => {
                assert_eq!(json, "{\"id\": 1,  \"name\": \"a\"}");
                assert_eq!(type_name, None);
            }
            _ => panic!("Expected JsonToType command"),
        }
    }

    #[test]
    fn test_parse_convert_type_to_json() {
        let cmd = parse_session_command("convert t2j interface User { id: number }").unwrap();
        assert!(matches!(
            cmd,
            SessionCommand::Convert(ConversionRequest::TypeToJson { .. })
        ));
    }

    #[test]
    fn test_parse_concept_refresh() {
        assert_eq!(
            parse_session_command("concept refresh").unwrap(),
            SessionCommand::Concept { refresh: true }
        );
        assert_eq!(
            parse_session_command("concept").unwrap(),
            SessionCommand::Concept { refresh: false }
        );
    }

    #[test]
    fn test_parse_save() {
        assert_eq!(
            parse_session_command("save 2").unwrap(),
            SessionCommand::Save(2)
        );
        assert!(parse_session_command("save two").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            parse_session_command("frobnicate"),
            Err(CliError::InvalidInput(_))
        ));
    }
}
