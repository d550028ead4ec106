use anyhow::Context;
use log::LevelFilter;
use wraptor::cli::{parse_args, Command, USAGE};
use wraptor::config::list_file;
use wraptor::host::memory::{MemoryTab, MemoryWindow};
use wraptor::host::TabEventHandler;
use wraptor::logging::Logger;
use wraptor::options::RunOptions;
use wraptor::transfer::move_between;
use wraptor::{error, BuiltinRegistry, ConfigApplication, LanguageId, ListKind, Wraptor, WraptorError};

fn main() {
    error::setup_panic_handler();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        if let Some(WraptorError::Usage(message)) = err.downcast_ref::<WraptorError>() {
            eprintln!("wraptor: {}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
        eprintln!("wraptor: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let cli = parse_args(args)?;
    let options = RunOptions::from_env()?.merged_with(&cli.options);
    init_logging(&options, &cli.command);

    match cli.command {
        Command::Help => println!("{}", USAGE),
        Command::Path => run_path(&options)?,
        Command::Config => run_config(&options)?,
        Command::List => run_list(&options)?,
        Command::Decide(language) => {
            let plugin = activate(&options)?;
            println!("{}", plugin.config().borrow().decide(Some(language.as_str())));
        }
        Command::Move { from, to, languages } => run_move(&options, from, to, &languages)?,
        Command::Simulate(languages) => run_simulate(&options, &languages)?,
        Command::Init { defaults } => {
            let plugin = activate(&options)?;
            if defaults && plugin.config().borrow_mut().seed_defaults()? {
                println!("seeded whitelist with default languages");
            }
            println!("{}", plugin.config_dir().display());
        }
    }

    Ok(())
}

fn init_logging(options: &RunOptions, command: &Command) {
    let level = if options.verbose {
        LevelFilter::Debug
    } else if matches!(command, Command::Config) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let logger = match command {
        // 画面を壊さないよう TUI 実行中はファイルにだけ出力
        Command::Config => {
            let logger = Logger::new(level).without_stderr();
            match options.resolve_log_path() {
                Some(path) => logger.with_file_output(path),
                None => logger,
            }
        }
        _ => match &options.log_path {
            Some(path) => Logger::new(level).with_file_output(path),
            None => Logger::new(level),
        },
    };

    if let Err(err) = logger.init() {
        eprintln!("wraptor: logger already initialized: {}", err);
    }
}

fn activate(options: &RunOptions) -> anyhow::Result<Wraptor> {
    let plugin = Wraptor::activate(options).context("failed to activate wraptor")?;
    for err in &plugin.load_report().recovered {
        eprintln!("wraptor: warning: {}", err);
    }
    Ok(plugin)
}

fn run_path(options: &RunOptions) -> anyhow::Result<()> {
    let dir = options.resolve_config_dir()?;
    println!("{}", dir.display());
    for kind in [ListKind::Whitelist, ListKind::Blacklist] {
        if let Some(path) = list_file(&dir, kind) {
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn run_config(options: &RunOptions) -> anyhow::Result<()> {
    let plugin = activate(options)?;
    let mut app = ConfigApplication::new(plugin.config(), &BuiltinRegistry);
    app.run().context("configuration UI failed")?;
    plugin.deactivate().context("failed to save language lists")?;
    Ok(())
}

fn run_list(options: &RunOptions) -> anyhow::Result<()> {
    let plugin = activate(options)?;
    let config = plugin.config();
    let store = config.borrow();
    let undecided = store.undecided(&BuiltinRegistry);

    for list in [store.whitelist(), &undecided, store.blacklist()] {
        let names: Vec<&str> = list.iter().map(LanguageId::as_str).collect();
        println!("{}: {}", list.kind(), names.join(", "));
    }
    Ok(())
}

fn run_move(options: &RunOptions, from: ListKind, to: ListKind, languages: &[String]) -> anyhow::Result<()> {
    let plugin = activate(options)?;
    let config = plugin.config();
    let mut undecided = config.borrow().undecided(&BuiltinRegistry);
    let selection: Vec<LanguageId> = languages.iter().map(|name| LanguageId::new(name.as_str())).collect();

    let moved = move_between(&mut config.borrow_mut(), &mut undecided, from, to, &selection)
        .with_context(|| format!("failed to move from {} to {}", from, to))?;
    println!("moved {} language(s) from {} to {}", moved, from, to);
    Ok(())
}

fn run_simulate(options: &RunOptions, languages: &[Option<String>]) -> anyhow::Result<()> {
    let mut plugin = activate(options)?;
    let mut window = MemoryWindow::new();

    for language in languages {
        let index = window.push_tab(MemoryTab::new(language.as_deref()));
        if let Some(tab) = window.tab_mut(index) {
            TabEventHandler::<MemoryWindow>::on_tab_added(plugin.binder_mut(), tab);
        }
    }

    // 最初のタブへ戻る切り替えも通知する
    if window.activate(0) {
        TabEventHandler::<MemoryWindow>::on_active_tab_changed(plugin.binder_mut(), &mut window);
    }

    for tab in window.tabs() {
        println!(
            "{}: {}",
            tab.document.language().unwrap_or("-"),
            tab.view.wrap_mode()
        );
    }
    Ok(())
}
