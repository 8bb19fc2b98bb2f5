use crate::infra::load_knowledge_base;
use clap::Args;
use skincare_check::analysis::{AnalysisView, IngredientAnalyzer};
use skincare_check::config::AppConfig;
use skincare_check::error::AppError;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Ingredient list as printed on the label. Read from stdin when neither this nor --file is set.
    #[arg(long, conflicts_with = "file")]
    pub(crate) ingredients: Option<String>,
    /// Read the ingredient list from a text file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Skin concern to weigh in: sensitive or acne_prone. Other values are ignored.
    #[arg(long)]
    pub(crate) skin_focus: Option<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        ingredients,
        file,
        skin_focus,
        json,
    } = args;

    let raw = match (ingredients, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let config = AppConfig::load()?;
    let knowledge_base = load_knowledge_base(&config.knowledge_base)?;
    let analyzer = IngredientAnalyzer::new(Arc::new(knowledge_base));
    let view = analyzer.check(&raw, skin_focus.as_deref())?;

    if json {
        let rendered = serde_json::to_string_pretty(&view).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        let mut rendered = String::new();
        render_report(&view, &mut rendered).map_err(std::io::Error::other)?;
        print!("{rendered}");
    }

    Ok(())
}

pub(crate) fn render_report(view: &AnalysisView, out: &mut impl fmt::Write) -> fmt::Result {
    writeln!(out, "{} · {}/100", view.verdict.label(), view.score)?;
    if let Some(focus) = view.skin_focus {
        writeln!(out, "Skin focus: {}", focus.label())?;
    }

    writeln!(out, "\nParsed ingredients ({})", view.parsed_ingredients.len())?;
    for ingredient in &view.parsed_ingredients {
        writeln!(out, "- {ingredient}")?;
    }

    writeln!(out, "\nFlags & notes")?;
    if view.findings.is_empty() {
        writeln!(out, "- none of these ingredients are in the knowledge base")?;
    }
    for finding in &view.findings {
        let tags = if finding.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", finding.tags.join(", "))
        };
        writeln!(
            out,
            "- {} (severity {}){tags}",
            finding.ingredient, finding.severity
        )?;
        if !finding.note.is_empty() {
            writeln!(out, "    {}", finding.note)?;
        }
    }

    if !view.summary.is_empty() {
        writeln!(out, "\nTag summary")?;
        for (tag, count) in &view.summary {
            writeln!(out, "- {tag}: {count}")?;
        }
    }

    Ok(())
}
