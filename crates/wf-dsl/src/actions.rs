use quick_xml::Reader;
use quick_xml::events::Event;
use wf_core::GameAction;

use crate::error::LoadResult;

/// Which list of the current `<action>` the reader is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Triggers,
    Subjects,
    Consumed,
    Produced,
}

/// Parse an actions document into its actions, in document order.
///
/// ```xml
/// <actions>
///   <action>
///     <triggers><keyphrase>chop</keyphrase></triggers>
///     <subjects><entity>tree</entity><entity>axe</entity></subjects>
///     <consumed><entity>tree</entity></consumed>
///     <produced><entity>log</entity></produced>
///     <narration>You cut down the tree with the axe</narration>
///   </action>
/// </actions>
/// ```
///
/// Every list may be empty or missing. Keyphrases and entity names are
/// trimmed and blank ones dropped. Elements outside an `<action>` are
/// ignored.
pub fn parse_actions(xml: &str) -> LoadResult<Vec<GameAction>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut actions = Vec::new();
    let mut current: Option<GameAction> = None;
    let mut section: Option<Section> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"action" => current = Some(GameAction::new("")),
                b"triggers" => section = Some(Section::Triggers),
                b"subjects" => section = Some(Section::Subjects),
                b"consumed" => section = Some(Section::Consumed),
                b"produced" => section = Some(Section::Produced),
                _ => text.clear(),
            },
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::End(e) => match e.name().as_ref() {
                b"action" => {
                    if let Some(action) = current.take() {
                        if action.triggers.is_empty() {
                            tracing::warn!(narration = %action.narration, "action has no triggers");
                        }
                        actions.push(action);
                    }
                }
                b"triggers" | b"subjects" | b"consumed" | b"produced" => section = None,
                b"narration" => {
                    if let Some(action) = current.as_mut() {
                        action.narration = text.trim().to_string();
                    }
                }
                tag @ (b"keyphrase" | b"entity") => {
                    current = current.map(|action| add_item(action, section, tag, &text));
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    tracing::debug!(count = actions.len(), "parsed actions");
    Ok(actions)
}

fn add_item(action: GameAction, section: Option<Section>, tag: &[u8], text: &str) -> GameAction {
    match (section, tag) {
        (Some(Section::Triggers), b"keyphrase") => action.with_trigger(text),
        (Some(Section::Subjects), b"entity") => action.with_subject(text),
        (Some(Section::Consumed), b"entity") => action.consumes(text),
        (Some(Section::Produced), b"entity") => action.produces(text),
        _ => action,
    }
}
