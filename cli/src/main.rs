use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lms_admin::config::{AdminConfig, ConfigError, StorageConfig, normalize_base_url};
use lms_admin::display::or_dash;
use lms_admin::model::{Badge, Chapter, Course, Editable, Material, QuestionKind, Resource, User};
use lms_admin::screens::assessment::QuestionDraft;
use lms_admin::screens::{
    Action, AssessmentScreen, AssignmentResponseScreen, AssignmentScreen, Button, ListScreen, ManageScreen, Notice,
    Row, ScreenError, SingletonMode, SingletonScreen, TableRow, TradeScreen,
};
use lms_admin::storage::{DisabledStorage, ObjectStorage, SelectedFile, StorageError, SupabaseStorage};
use lms_admin::{ApiError, Backend, Credentials, HttpBackend, Session, SessionError};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing session token; run `login` and pass --session-token or set LMS_SESSION_TOKEN")]
    MissingSessionToken,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Screen(#[from] ScreenError),
    #[error("{0}")]
    Rejected(String),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "lms-admin", about = "LMS admin dashboard CLI")]
struct Cli {
    #[arg(long, env = "LMS_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "LMS_SESSION_TOKEN", hide_env_values = true)]
    session_token: Option<String>,

    #[arg(long, requires = "storage_key")]
    storage_url: Option<String>,

    #[arg(long, requires = "storage_url", hide_env_values = true)]
    storage_key: Option<String>,

    #[arg(long, env = "LMS_PAGE_SIZE")]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

struct CliContext {
    config: AdminConfig,
    session_token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the session token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "LMS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Course(CourseCommand),
    Chapter(ChapterCommand),
    Badge(BadgeCommand),
    Trade(TradeCommand),
    User(UserCommand),
    Material(MaterialCommand),
    Assignment(AssignmentCommand),
    Assessment(AssessmentCommand),
    /// List who submitted an assignment.
    Responses {
        course_id: i64,
        assignment_id: i64,
        #[command(flatten)]
        view: ListArgs,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, help = "Case-insensitive search over the listed records")]
    filter: Option<String>,

    #[arg(long, default_value_t = 1, help = "1-based page number")]
    page: usize,
}

#[derive(Args, Debug)]
struct ConfirmArgs {
    #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
    yes: bool,
}

#[derive(Args, Debug)]
struct CourseCommand {
    #[command(subcommand)]
    command: CourseSubcommand,
}

#[derive(Subcommand, Debug)]
enum CourseSubcommand {
    List(ListArgs),
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        code: Option<String>,
    },
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Args, Debug)]
struct ChapterCommand {
    #[command(subcommand)]
    command: ChapterSubcommand,
}

#[derive(Subcommand, Debug)]
enum ChapterSubcommand {
    List {
        course_id: i64,
        #[command(flatten)]
        view: ListArgs,
    },
    Create {
        course_id: i64,
        #[arg(long)]
        name: String,
    },
    Update {
        course_id: i64,
        id: i64,
        #[arg(long)]
        name: Option<String>,
    },
    Delete {
        course_id: i64,
        id: i64,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Args, Debug)]
struct BadgeCommand {
    #[command(subcommand)]
    command: BadgeSubcommand,
}

#[derive(Args, Debug)]
struct BadgeFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long = "type", help = "BEGINNER, INTERMEDIATE or ADVANCE")]
    level: Option<String>,
    #[arg(long)]
    course_id: Option<String>,
    #[arg(long)]
    chapter_id: Option<String>,
}

impl BadgeFields {
    fn into_fields(self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("name", self.name),
            ("type", self.level),
            ("courseId", self.course_id),
            ("chapterId", self.chapter_id),
        ]
    }
}

#[derive(Subcommand, Debug)]
enum BadgeSubcommand {
    List(ListArgs),
    Create(BadgeFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: BadgeFields,
    },
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Args, Debug)]
struct TradeCommand {
    #[command(subcommand)]
    command: TradeSubcommand,
}

#[derive(Args, Debug)]
struct TradeFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, help = "BEGINNER, INTERMEDIATE or ADVANCE")]
    badge_type: Option<String>,
    #[arg(long, help = "Image file to upload")]
    image: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum TradeSubcommand {
    List(ListArgs),
    Create(TradeFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: TradeFields,
    },
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List(ListArgs),
}

#[derive(Args, Debug)]
struct MaterialCommand {
    #[command(subcommand)]
    command: MaterialSubcommand,
}

#[derive(Subcommand, Debug)]
enum MaterialSubcommand {
    Show {
        chapter_id: i64,
    },
    Save {
        chapter_id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        #[arg(long, help = "Read HTML content from a file")]
        content_file: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct AssignmentCommand {
    #[command(subcommand)]
    command: AssignmentSubcommand,
}

#[derive(Subcommand, Debug)]
enum AssignmentSubcommand {
    Show {
        chapter_id: i64,
        #[arg(long)]
        course_id: Option<i64>,
    },
    Save {
        chapter_id: i64,
        #[arg(long)]
        course_id: Option<i64>,
        #[arg(long)]
        instruction: Option<String>,
        #[arg(long, help = "File to attach")]
        file: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct AssessmentCommand {
    #[command(subcommand)]
    command: AssessmentSubcommand,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum KindArg {
    Mc,
    Essay,
}

impl From<KindArg> for QuestionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Mc => Self::MultipleChoice,
            KindArg::Essay => Self::Essay,
        }
    }
}

#[derive(Args, Debug)]
struct QuestionArgs {
    #[arg(long, value_enum, default_value_t = KindArg::Mc)]
    kind: KindArg,
    #[arg(long)]
    prompt: String,
    #[arg(long = "option", help = "Answer option; repeat for each")]
    options: Vec<String>,
    #[arg(long, default_value = "")]
    answer: String,
}

impl QuestionArgs {
    fn into_draft(self) -> QuestionDraft {
        let mut draft = QuestionDraft { kind: self.kind.into(), prompt: self.prompt, ..QuestionDraft::default() };
        for option in &self.options {
            draft.add_option(option);
        }
        draft.answer = self.answer;
        draft
    }
}

#[derive(Subcommand, Debug)]
enum AssessmentSubcommand {
    Show {
        chapter_id: i64,
    },
    Create {
        chapter_id: i64,
        #[arg(long, default_value = "")]
        instruction: String,
    },
    AddQuestion {
        chapter_id: i64,
        #[command(flatten)]
        question: QuestionArgs,
    },
    UpdateQuestion {
        chapter_id: i64,
        question_id: Uuid,
        #[command(flatten)]
        question: QuestionArgs,
    },
    RemoveQuestion {
        chapter_id: i64,
        question_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AdminConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = normalize_base_url(&base_url);
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size.max(1);
    }
    if let (Some(url), Some(key)) = (cli.storage_url, cli.storage_key) {
        config.storage = Some(StorageConfig { url: url.trim_end_matches('/').to_owned(), key });
    }
    let ctx = CliContext { config, session_token: cli.session_token };

    match cli.command {
        Command::Login { username, password } => run_login(&ctx, username, password).await,
        Command::Course(course) => run_course(&ctx, course).await,
        Command::Chapter(chapter) => run_chapter(&ctx, chapter).await,
        Command::Badge(badge) => run_badge(&ctx, badge).await,
        Command::Trade(trade) => run_trade(&ctx, trade).await,
        Command::User(user) => run_user(&ctx, user).await,
        Command::Material(material) => run_material(&ctx, material).await,
        Command::Assignment(assignment) => run_assignment(&ctx, assignment).await,
        Command::Assessment(assessment) => run_assessment(&ctx, assessment).await,
        Command::Responses { course_id, assignment_id, view } => {
            run_responses(&ctx, course_id, assignment_id, &view).await
        }
    }
}

impl CliContext {
    fn backend(&self) -> Result<HttpBackend, CliError> {
        let token = self.session_token.clone().ok_or(CliError::MissingSessionToken)?;
        let session = Session::new(token, None);
        Ok(HttpBackend::new(&self.config, Some(&session))?)
    }

    /// Storage is only needed when a command touches a file.
    fn storage(&self) -> Result<Box<dyn ObjectStorage>, CliError> {
        match &self.config.storage {
            Some(storage) => Ok(Box::new(SupabaseStorage::new(storage, self.config.timeouts)?)),
            None => Ok(Box::new(DisabledStorage)),
        }
    }
}

async fn run_login(ctx: &CliContext, username: String, password: String) -> Result<(), CliError> {
    let backend = HttpBackend::new(&ctx.config, None)?;
    let session = Session::login(&backend, &Credentials { username, password }).await?;
    if let Some(user) = session.user() {
        info!(name = user.name.as_deref().unwrap_or("-"), role = %user.role, "signed in");
    }
    println!("{}", session.token());
    Ok(())
}

// =============================================================================
// LIST & MANAGE
// =============================================================================

async fn run_course(ctx: &CliContext, course: CourseCommand) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    match course.command {
        CourseSubcommand::List(view) => list_records::<Course>(ctx, &backend, None, &view).await,
        CourseSubcommand::Create { name, code } => {
            create_record::<Course>(ctx, &backend, None, vec![("name", Some(name)), ("code", Some(code))]).await
        }
        CourseSubcommand::Update { id, name, code } => {
            update_record::<Course>(ctx, &backend, None, id, vec![("name", name), ("code", code)]).await
        }
        CourseSubcommand::Delete { id, confirm } => delete_record::<Course>(ctx, &backend, None, id, &confirm).await,
    }
}

async fn run_chapter(ctx: &CliContext, chapter: ChapterCommand) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    match chapter.command {
        ChapterSubcommand::List { course_id, view } => {
            list_records::<Chapter>(ctx, &backend, Some(course_id), &view).await
        }
        ChapterSubcommand::Create { course_id, name } => {
            create_record::<Chapter>(ctx, &backend, Some(course_id), vec![("name", Some(name))]).await
        }
        ChapterSubcommand::Update { course_id, id, name } => {
            update_record::<Chapter>(ctx, &backend, Some(course_id), id, vec![("name", name)]).await
        }
        ChapterSubcommand::Delete { course_id, id, confirm } => {
            delete_record::<Chapter>(ctx, &backend, Some(course_id), id, &confirm).await
        }
    }
}

async fn run_badge(ctx: &CliContext, badge: BadgeCommand) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    match badge.command {
        BadgeSubcommand::List(view) => list_records::<Badge>(ctx, &backend, None, &view).await,
        BadgeSubcommand::Create(fields) => create_record::<Badge>(ctx, &backend, None, fields.into_fields()).await,
        BadgeSubcommand::Update { id, fields } => {
            update_record::<Badge>(ctx, &backend, None, id, fields.into_fields()).await
        }
        BadgeSubcommand::Delete { id, confirm } => delete_record::<Badge>(ctx, &backend, None, id, &confirm).await,
    }
}

async fn run_user(ctx: &CliContext, user: UserCommand) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    match user.command {
        UserSubcommand::List(view) => {
            let mut list = ListScreen::<User>::new(User::list_path(None), None).with_page_size(ctx.config.page_size);
            list.load(&backend).await?;
            print_list(&mut list, &view);
            Ok(())
        }
    }
}

async fn list_records<R: Editable + TableRow>(
    ctx: &CliContext,
    backend: &dyn Backend,
    scope: Option<i64>,
    view: &ListArgs,
) -> Result<(), CliError> {
    let mut screen = ManageScreen::<R>::new(scope).with_page_size(ctx.config.page_size);
    screen.load(backend).await?;
    print_list(&mut screen.list, view);
    Ok(())
}

async fn create_record<R: Editable + TableRow>(
    ctx: &CliContext,
    backend: &dyn Backend,
    scope: Option<i64>,
    fields: Vec<(&'static str, Option<String>)>,
) -> Result<(), CliError> {
    let mut screen = ManageScreen::<R>::new(scope).with_page_size(ctx.config.page_size);
    screen.open_add();
    for (name, value) in fields {
        if let Some(value) = value {
            screen.set_field(name, &value)?;
        }
    }
    screen.submit(backend).await?;
    println!("created {}", R::COLLECTION);
    print_list(&mut screen.list, &ListArgs { filter: None, page: 1 });
    Ok(())
}

async fn update_record<R: Editable + TableRow>(
    ctx: &CliContext,
    backend: &dyn Backend,
    scope: Option<i64>,
    id: i64,
    fields: Vec<(&'static str, Option<String>)>,
) -> Result<(), CliError> {
    let mut screen = ManageScreen::<R>::new(scope).with_page_size(ctx.config.page_size);
    screen.load(backend).await?;
    screen.open_edit(id)?;
    for (name, value) in fields {
        if let Some(value) = value {
            screen.set_field(name, &value)?;
        }
    }
    screen.submit(backend).await?;
    println!("updated {} {id}", R::COLLECTION);
    Ok(())
}

async fn delete_record<R: Editable + TableRow>(
    ctx: &CliContext,
    backend: &dyn Backend,
    scope: Option<i64>,
    id: i64,
    confirm: &ConfirmArgs,
) -> Result<(), CliError> {
    let mut screen = ManageScreen::<R>::new(scope).with_page_size(ctx.config.page_size);
    let deleted = screen
        .delete(backend, id, |id| ask(&format!("Delete {} {id}?", R::COLLECTION), confirm.yes))
        .await?;
    if deleted {
        println!("deleted {} {id}", R::COLLECTION);
    } else {
        println!("cancelled");
    }
    Ok(())
}

// =============================================================================
// FILE-BACKED RECORDS
// =============================================================================

async fn run_trade(ctx: &CliContext, trade: TradeCommand) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    let storage = ctx.storage()?;
    let mut screen = TradeScreen::new().with_page_size(ctx.config.page_size);
    screen.load(&backend).await?;

    match trade.command {
        TradeSubcommand::List(view) => {
            print_list(&mut screen.list, &view);
            Ok(())
        }
        TradeSubcommand::Create(fields) => {
            screen.open_add();
            fill_trade(&mut screen, fields).await?;
            finish(screen.submit(&backend, storage.as_ref()).await)
        }
        TradeSubcommand::Update { id, fields } => {
            screen.open_edit(id)?;
            fill_trade(&mut screen, fields).await?;
            finish(screen.submit(&backend, storage.as_ref()).await)
        }
        TradeSubcommand::Delete { id, confirm } => {
            let notice = screen
                .delete(&backend, storage.as_ref(), id, |id| ask(&format!("Delete trade {id}?"), confirm.yes))
                .await;
            match notice {
                Some(notice) => finish(notice),
                None => {
                    println!("cancelled");
                    Ok(())
                }
            }
        }
    }
}

async fn fill_trade(screen: &mut TradeScreen, fields: TradeFields) -> Result<(), CliError> {
    let text_fields =
        [("title", fields.title), ("description", fields.description), ("requiredBadgeType", fields.badge_type)];
    for (name, value) in text_fields {
        if let Some(value) = value {
            screen.set_field(name, &value)?;
        }
    }
    if let Some(path) = fields.image {
        screen.select_image(SelectedFile::read(&path).await?);
    }
    Ok(())
}

async fn run_assignment(ctx: &CliContext, assignment: AssignmentCommand) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    match assignment.command {
        AssignmentSubcommand::Show { chapter_id, course_id } => {
            let mut screen = AssignmentScreen::new(course_id, chapter_id);
            screen.load(&backend).await?;
            if let Some(course) = screen.course() {
                println!("course:      {} ({})", course.name, course.code);
            }
            print_mode(screen.mode());
            println!("instruction: {}", screen.draft().instruction);
            println!("file:        {}", or_dash(Some(&screen.draft().file_url)));
            Ok(())
        }
        AssignmentSubcommand::Save { chapter_id, course_id, instruction, file } => {
            let storage = ctx.storage()?;
            let mut screen = AssignmentScreen::new(course_id, chapter_id);
            screen.load(&backend).await?;
            if let Some(instruction) = instruction {
                screen.set_instruction(&instruction)?;
            }
            if let Some(path) = file {
                screen.select_file(SelectedFile::read(&path).await?);
            }
            screen.save(&backend, storage.as_ref()).await?;
            if let Some(warning) = screen.warning() {
                eprintln!("warning: {warning}");
            }
            print_mode(screen.mode());
            println!("file:        {}", or_dash(Some(&screen.draft().file_url)));
            Ok(())
        }
    }
}

// =============================================================================
// CHAPTER CONTENT
// =============================================================================

async fn run_material(ctx: &CliContext, material: MaterialCommand) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    match material.command {
        MaterialSubcommand::Show { chapter_id } => {
            let mut screen = SingletonScreen::<Material>::new(chapter_id);
            screen.load(&backend).await?;
            print_mode(screen.mode());
            println!("name:    {}", screen.draft().name);
            println!("content: {}", screen.draft().content);
            Ok(())
        }
        MaterialSubcommand::Save { chapter_id, name, content, content_file } => {
            let mut screen = SingletonScreen::<Material>::new(chapter_id);
            screen.load(&backend).await?;
            let content = match content_file {
                Some(path) => Some(tokio::fs::read_to_string(&path).await?),
                None => content,
            };
            for (field, value) in [("name", name), ("content", content)] {
                if let Some(value) = value {
                    screen.set_field(field, &value)?;
                }
            }
            screen.save(&backend).await?;
            print_mode(screen.mode());
            Ok(())
        }
    }
}

async fn run_assessment(ctx: &CliContext, assessment: AssessmentCommand) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    match assessment.command {
        AssessmentSubcommand::Show { chapter_id } => {
            let mut screen = AssessmentScreen::new(chapter_id);
            screen.load(&backend).await?;
            print_questions(&screen);
            Ok(())
        }
        AssessmentSubcommand::Create { chapter_id, instruction } => {
            let mut screen = AssessmentScreen::new(chapter_id);
            screen.load(&backend).await?;
            screen.set_instruction(&instruction);
            screen.create(&backend).await?;
            print_questions(&screen);
            Ok(())
        }
        AssessmentSubcommand::AddQuestion { chapter_id, question } => {
            let mut screen = AssessmentScreen::new(chapter_id);
            screen.load(&backend).await?;
            screen.draft = question.into_draft();
            let added = screen.save_question(&backend).await?;
            println!("{}", added.id);
            Ok(())
        }
        AssessmentSubcommand::UpdateQuestion { chapter_id, question_id, question } => {
            let mut screen = AssessmentScreen::new(chapter_id);
            screen.load(&backend).await?;
            screen.update_question(&backend, question_id, &question.into_draft()).await?;
            println!("updated question {question_id}");
            Ok(())
        }
        AssessmentSubcommand::RemoveQuestion { chapter_id, question_id } => {
            let mut screen = AssessmentScreen::new(chapter_id);
            screen.load(&backend).await?;
            screen.remove_question(&backend, question_id).await?;
            println!("removed question {question_id}");
            Ok(())
        }
    }
}

async fn run_responses(
    ctx: &CliContext,
    course_id: i64,
    assignment_id: i64,
    view: &ListArgs,
) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    let mut screen = AssignmentResponseScreen::new(course_id, assignment_id).with_page_size(ctx.config.page_size);
    screen.load(&backend).await?;
    if let Some(course) = screen.course() {
        println!("course: {} ({})", course.name, course.code);
    }
    print_list(&mut screen.list, view);
    Ok(())
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_list<R: TableRow>(list: &mut ListScreen<R>, view: &ListArgs) {
    if let Some(filter) = &view.filter {
        list.set_filter(filter);
    }
    list.go_to_page(view.page.saturating_sub(1));
    print_table(R::COLUMNS, &list.page_rows());
    println!("page {}/{}", list.current_page() + 1, list.page_count());
}

fn print_table(columns: &[&str], rows: &[Row]) {
    println!("{}\tACTIONS", columns.join("\t"));
    for row in rows {
        let actions: Vec<String> = row.buttons.iter().map(describe_button).collect();
        println!("{}\t{}", row.cells.join("\t"), actions.join(" "));
    }
}

fn describe_button(button: &Button) -> String {
    match &button.action {
        Action::Edit(id) | Action::Delete(id) => format!("{}:{id}", button.label),
        Action::Navigate(route) => format!("{}:{}", button.label, route.path()),
        Action::Open(url) => format!("{}:{url}", button.label),
        Action::Notify(message) => format!("{}:({message})", button.label),
    }
}

fn print_mode(mode: SingletonMode) {
    match mode {
        SingletonMode::Add => println!("mode:        add"),
        SingletonMode::Edit { id } => println!("mode:        edit ({id})"),
    }
}

fn print_questions(screen: &AssessmentScreen) {
    let Some(assessment) = screen.assessment() else {
        println!("no assessment yet; run `assessment create`");
        return;
    };
    println!("assessment {}: {}", assessment.id, screen.instruction());
    if let Some(error) = screen.error() {
        eprintln!("warning: {error}");
    }
    for (question, button) in screen.questions().iter().zip(screen.question_buttons()) {
        let options = question.options.as_deref().unwrap_or_default().join(" | ");
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            question.id,
            question.kind.label(),
            question.question,
            or_dash(Some(&options)),
            or_dash(Some(&question.answer)),
            describe_button(&button),
        );
    }
}

/// Print a notice; anything short of success is a failed command.
fn finish(notice: Notice) -> Result<(), CliError> {
    if notice.is_success() {
        println!("{}", notice.text);
        Ok(())
    } else {
        Err(CliError::Rejected(notice.text))
    }
}

fn ask(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    eprint!("{prompt} [y/N] ");
    let _ = io::stderr().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}
