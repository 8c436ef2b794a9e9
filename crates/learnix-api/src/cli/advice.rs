//! `learnix advice` -- print canned advice without calling the model.

use anyhow::Result;
use console::style;

use learnix_types::advice::{Advice, AdviceTopic};

pub fn show_advice(topic: Option<AdviceTopic>, json: bool) -> Result<()> {
    match topic {
        Some(topic) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&Advice::from(topic))?);
            } else {
                print_advice(topic);
            }
        }
        None => {
            if json {
                let all: Vec<Advice> = AdviceTopic::ALL.into_iter().map(Advice::from).collect();
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                print_topics();
            }
        }
    }
    Ok(())
}

/// Print one topic's advice in the styled layout shared with the chat loop.
pub fn print_advice(topic: AdviceTopic) {
    println!();
    println!("  {}", style(topic.label()).cyan().bold());
    println!("  {}", topic.advice());
    println!();
}

pub fn print_topics() {
    println!();
    println!("  {}", style("Advice topics:").bold());
    for topic in AdviceTopic::ALL {
        println!("  {}  {}", style(topic.to_string()).cyan(), style(topic.label()).dim());
    }
    println!();
}
