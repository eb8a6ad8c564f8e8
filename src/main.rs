use clap::{Parser, Subcommand};
use huguinho::config::{self, BuildOptions};
use huguinho::disk::Disk;
use huguinho::markdown::MarkdownConverter;
use huguinho::output;
use huguinho::pipeline::Pipeline;
use huguinho::render::{self, BasePathRenderer, Renderer, TemplateRenderer};
use huguinho::templates::BuiltinTemplates;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "huguinho")]
#[command(about = "Static site generator for markdown articles")]
#[command(long_about = "\
Static site generator for markdown articles

Every *.md file under the content directory is an article: a front-matter
block, the +++ divider, then the markdown body.

  title: Hello, world
  intro: The first post.
  slug: /hello-world
  date: 2023-07-07
  tags: rust notes
  draft: false
  +++
  The *body*.

Output layout:

  rendered/
  ├── index.html                   # Latest articles + prominent topics
  ├── archives/index.html          # Every article, newest first
  ├── hello-world/index.html       # One folder per article slug
  └── topics/
      ├── index.html               # Every topic with its article count
      └── rust/index.html          # Articles tagged 'rust'

Drafts and future-dated articles are left out unless asked for. The exit
status is the number of errors (0 on a clean build).

Run 'huguinho gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    content: PathBuf,

    /// Output directory
    #[arg(long, visible_alias = "target", default_value = "rendered", global = true)]
    output: PathBuf,

    /// Prefix for site links when served from a sub-directory (e.g. /blog)
    #[arg(long, default_value = "", global = true)]
    base_path: String,

    /// Publish articles marked as drafts
    #[arg(long, global = true)]
    with_drafts: bool,

    /// Publish articles dated in the future
    #[arg(long, global = true)]
    with_future: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the whole site (the default)
    Build,
    /// Parse and validate every article without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Render one JSON page model to stdout
    Render {
        /// Path to a page model, e.g. {"kind": "archives", "pages": []}
        model: PathBuf,
    },
}

impl Cli {
    fn build_options(&self) -> BuildOptions {
        BuildOptions {
            content_root: self.content.clone(),
            output_root: self.output.clone(),
            base_path: self.base_path.clone(),
            with_drafts: self.with_drafts,
            with_future: self.with_future,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = cli.build_options();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = options.load_site_config()?;
            let renderer = BasePathRenderer::new(
                TemplateRenderer::new(BuiltinTemplates::new(&site_config)),
                &options.base_path,
            );
            let today = chrono::Local::now().date_naive();
            let pipeline = Pipeline::new(
                &options,
                &site_config,
                &Disk,
                &renderer,
                &MarkdownConverter,
                today,
            );

            println!(
                "==> Building {} → {}",
                options.content_root.display(),
                options.output_root.display()
            );
            let report = pipeline.build()?;
            output::print_build_output(&report);
            Ok(ExitCode::from(report.exit_code()))
        }
        Command::Check => {
            let site_config = options.load_site_config()?;
            let renderer = TemplateRenderer::new(BuiltinTemplates::new(&site_config));
            let today = chrono::Local::now().date_naive();
            let pipeline = Pipeline::new(
                &options,
                &site_config,
                &Disk,
                &renderer,
                &MarkdownConverter,
                today,
            );

            println!("==> Checking {}", options.content_root.display());
            let report = pipeline.check()?;
            output::print_check_output(&report);
            Ok(ExitCode::from(report.exit_code()))
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(ExitCode::SUCCESS)
        }
        Command::Render { model } => {
            let site_config = options.load_site_config()?;
            let renderer = BasePathRenderer::new(
                TemplateRenderer::new(BuiltinTemplates::new(&site_config)),
                &options.base_path,
            );
            let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&model)?)?;
            let page = render::parse_page_model(json)?;
            log::info!("rendering {} page from {}", page.kind(), model.display());
            print!("{}", renderer.render(&page)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
