use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use encyclo::api::EncycloApi;
use encyclo::commands::{ArticleView, CmdMessage, ImageAction, MessageLevel};
use encyclo::commands::stats::ArticleStats;
use encyclo::error::{EncycloError, Result};
use encyclo::store::fs::FileBackend;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;
    let (user, password) = credentials(&cli)?;

    if matches!(cli.command, Commands::Register) {
        let result = api.register(&user, &password)?;
        print_messages(&result.messages);
        return Ok(());
    }

    api.login(&user, &password)?;

    match cli.command {
        Commands::Register => unreachable!("handled above"),
        Commands::Create {
            title,
            content,
            category,
            image,
        } => handle_create(&mut api, title, category, content, image),
        Commands::List => handle_list(&api),
        Commands::Search { query, category } => handle_search(&api, query, category),
        Commands::View { titles } => handle_view(&api, titles),
        Commands::Edit {
            title,
            new_title,
            category,
            content,
            image,
            remove_image,
        } => handle_edit(&mut api, title, new_title, category, content, image, remove_image),
        Commands::Delete { titles } => handle_delete(&mut api, titles),
        Commands::Stats => handle_stats(&api),
        Commands::Categories => handle_categories(&api),
    }
}

fn init_api(cli: &Cli) -> Result<EncycloApi<FileBackend>> {
    let path = match &cli.file {
        Some(path) => path.clone(),
        None => default_db_path(),
    };
    Ok(EncycloApi::new(FileBackend::new(path)))
}

fn default_db_path() -> PathBuf {
    let proj_dirs =
        ProjectDirs::from("com", "encyclo", "encyclo").expect("Could not determine data dir");
    proj_dirs.data_dir().join("encyclopedia.json")
}

fn credentials(cli: &Cli) -> Result<(String, String)> {
    let user = cli
        .user
        .clone()
        .ok_or_else(|| EncycloError::Api("Missing --user".to_string()))?;
    let password = cli
        .password
        .clone()
        .ok_or_else(|| EncycloError::Api("Missing --password".to_string()))?;
    Ok((user, password))
}

fn handle_create(
    api: &mut EncycloApi<FileBackend>,
    title: String,
    category: String,
    content: String,
    image: Option<PathBuf>,
) -> Result<()> {
    let image = read_image(image)?;
    let result = api.create_article(&title, &category, &content, image)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &EncycloApi<FileBackend>) -> Result<()> {
    let result = api.list_articles()?;
    print_articles(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    api: &EncycloApi<FileBackend>,
    query: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let result = api.search_articles(query.as_deref(), category.as_deref())?;
    print_articles(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &EncycloApi<FileBackend>, titles: Vec<String>) -> Result<()> {
    let result = api.view_articles(&titles)?;
    print_full_articles(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    api: &mut EncycloApi<FileBackend>,
    title: String,
    new_title: Option<String>,
    category: Option<String>,
    content: Option<String>,
    image: Option<PathBuf>,
    remove_image: bool,
) -> Result<()> {
    // Fill unspecified fields from the stored article
    let current = api.view_articles(&[title.as_str()])?;
    let current = &current.listed[0].article;

    let new_title = new_title.unwrap_or_else(|| title.clone());
    let category = category.unwrap_or_else(|| current.categories.join(", "));
    let content = content.unwrap_or_else(|| current.content.clone());
    let image_action = if remove_image {
        ImageAction::Delete
    } else {
        match read_image(image)? {
            Some(bytes) => ImageAction::Replace(bytes),
            None => ImageAction::Keep,
        }
    };

    let result = api.update_article(&title, &new_title, &category, &content, image_action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut EncycloApi<FileBackend>, titles: Vec<String>) -> Result<()> {
    for title in titles {
        let result = api.delete_article(&title)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_stats(api: &EncycloApi<FileBackend>) -> Result<()> {
    let result = api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(api: &EncycloApi<FileBackend>) -> Result<()> {
    let result = api.categories()?;
    if result.categories.is_empty() {
        println!("No categories yet.");
    }
    for category in &result.categories {
        println!("{}", category);
    }
    Ok(())
}

fn read_image(path: Option<PathBuf>) -> Result<Option<Vec<u8>>> {
    match path {
        Some(path) => Ok(Some(std::fs::read(path).map_err(EncycloError::Io)?)),
        None => Ok(None),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_articles(articles: &[ArticleView]) {
    for (i, view) in articles.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{}", view.title.bold());
        println!("--------------------------------");
        println!(
            "{} {}",
            "Categories:".dimmed(),
            view.article.categories.join(", ")
        );
        println!("{} {}", "Created:".dimmed(), view.article.created_at);
        if let Some(updated) = view.article.updated_at {
            println!("{} {}", "Updated:".dimmed(), updated);
        }
        if let Some(image) = &view.article.image {
            println!("{} {} bytes", "Image:".dimmed(), image.len());
        }
        println!();
        println!("{}", view.article.content);
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const IMAGE_MARKER: &str = "▣";

fn print_articles(articles: &[ArticleView]) {
    if articles.is_empty() {
        println!("No articles found.");
        return;
    }

    for view in articles {
        let categories = format!("[{}]", view.article.categories.join(", "));

        let preview: String = view
            .article
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = format!("{} {} {}", view.title, categories, preview);

        let marker = if view.article.image.is_some() {
            format!("{} ", IMAGE_MARKER)
        } else {
            "  ".to_string()
        };

        let fixed_width = 4 + marker.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = truncate_to_width(&line, available);
        let padding = available.saturating_sub(display.width());

        let time_ago = format_time_ago(view.article.created_at);

        println!(
            "    {}{}{}{}",
            display,
            " ".repeat(padding),
            marker,
            time_ago.dimmed()
        );
    }
}

fn print_stats(stats: &ArticleStats) {
    println!("{} {}", "Articles:".bold(), stats.total_articles);
    println!("{} {}", "Categories:".bold(), stats.distinct_categories);
    println!("{} {}", "Total characters:".bold(), stats.total_content_chars);
    println!("{} {}", "With images:".bold(), stats.articles_with_images);

    if !stats.category_counts.is_empty() {
        println!();
        println!("{}", "Articles per category".bold());
        println!("---------------------");
        for (category, count) in &stats.category_counts {
            println!("{}: {}", category, count);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
