//! Handler for the `similarity` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::SimilarityArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::similarity;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Score two names and report whether they would be linked.
pub fn execute(args: &SimilarityArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(threshold) = args.threshold {
        config.unify.threshold = threshold;
    }
    config.validate()?;

    let threshold = config.unify.threshold;
    let score = similarity(&args.left, &args.right);
    let linked = score >= threshold;

    if output::is_json() {
        output::json_output(json!({
            "command": "similarity",
            "left": args.left,
            "right": args.right,
            "similarity": score,
            "threshold": threshold,
            "linked": linked,
        }));
        return Ok(());
    }

    output::field("Similarity", output::highlight(format!("{score:.3}")));
    output::field("Threshold", format!("{threshold:.3}"));
    if linked {
        output::success("Names would be clustered together");
    } else {
        output::note("Names would stay in separate clusters");
        if score > 0.0 {
            output::hint(&format!("set --threshold at or below {score} to link them"));
        }
    }
    Ok(())
}
