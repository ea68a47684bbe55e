use std::collections::BTreeSet;

use crate::animation::engine::Engine;
use crate::animation::profile::RevealProfile;
use crate::animation::tween::unit_offset;
use crate::document::tree::NodeId;
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::{RevealError, RevealResult};
use crate::lifecycle::config::RunConfig;
use crate::lifecycle::container::compose_container;
use crate::lifecycle::copy::CopyReveal;
use crate::stage::stage::Stage;
use crate::trigger::coordinator::TriggerState;

/// JSON description of a page: a viewport and blocks of text placed at fixed offsets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    /// Visible window; defaults to 1280x800.
    #[serde(default)]
    pub viewport: Viewport,
    /// Overrides the engine's default profile for every block.
    #[serde(default)]
    pub profile: Option<RevealProfile>,
    /// Blocks in document order.
    pub blocks: Vec<BlockDef>,
}

/// One revealed block: its text elements, where it sits, and how it reveals.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlockDef {
    /// Unique block id, also written as the section's `id` attribute.
    pub id: String,
    /// Top edge in document coordinates.
    pub top: f64,
    /// Height of the block's section.
    #[serde(default = "default_block_height")]
    pub height: f64,
    /// Text elements inside the block.
    pub texts: Vec<TextDef>,
    /// Run configuration for the block's reveal.
    #[serde(default)]
    pub config: RunConfig,
}

/// One text element of a block.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextDef {
    /// Element tag, `p` by default.
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Text content.
    pub text: String,
}

fn default_block_height() -> f64 {
    100.0
}

fn default_tag() -> String {
    "p".to_owned()
}

impl SceneDef {
    /// Parse and validate a scene.
    pub fn from_json(s: &str) -> RevealResult<Self> {
        let def: Self = serde_json::from_str(s)?;
        def.validate()?;
        Ok(def)
    }

    /// Reject duplicate ids, bad placements, empty tags and invalid profiles.
    pub fn validate(&self) -> RevealResult<()> {
        if let Some(profile) = &self.profile {
            profile.validate()?;
        }
        let mut seen = BTreeSet::new();
        for block in &self.blocks {
            if !seen.insert(block.id.as_str()) {
                return Err(RevealError::validation(format!(
                    "duplicate block id '{}'",
                    block.id
                )));
            }
            if !(block.top.is_finite() && block.height.is_finite() && block.height >= 0.0) {
                return Err(RevealError::validation(format!(
                    "block '{}' has invalid placement",
                    block.id
                )));
            }
            if block.texts.iter().any(|t| t.tag.trim().is_empty()) {
                return Err(RevealError::validation(format!(
                    "block '{}' has an empty tag",
                    block.id
                )));
            }
        }
        Ok(())
    }

    /// Build the document and mount one orchestrator per block.
    #[tracing::instrument(skip_all, fields(blocks = self.blocks.len()))]
    pub fn build(&self, engine: &'static Engine) -> RevealResult<Scene> {
        self.validate()?;
        let mut stage = Stage::new(engine, self.viewport);
        let profile = self
            .profile
            .clone()
            .unwrap_or_else(|| engine.default_profile().clone());

        let mut blocks = Vec::with_capacity(self.blocks.len());
        for def in &self.blocks {
            let doc = stage.document_mut();
            let section = doc.create_element("section");
            doc.set_attr(section, "id", def.id.as_str())?;
            doc.set_bounds(
                section,
                Rect::new(0.0, def.top, self.viewport.width, def.top + def.height),
            )?;
            let root = doc.root();
            doc.append_child(root, section)?;

            let children = def
                .texts
                .iter()
                .map(|t| -> RevealResult<NodeId> {
                    let el = doc.create_element(t.tag.as_str());
                    let text = doc.create_text(t.text.as_str());
                    doc.append_child(el, text)?;
                    Ok(el)
                })
                .collect::<RevealResult<Vec<NodeId>>>()?;
            let container = compose_container(doc, section, &children)?;

            let reveal =
                CopyReveal::mount_with_profile(&mut stage, container, def.config, profile.clone())?;
            blocks.push(SceneBlock {
                id: def.id.clone(),
                section,
                reveal,
            });
        }

        Ok(Scene { stage, blocks })
    }
}

/// A block of a built scene.
#[derive(Debug)]
pub struct SceneBlock {
    /// Block id from the definition.
    pub id: String,
    /// The block's `section` element.
    pub section: NodeId,
    /// Orchestrator bound to the block's content.
    pub reveal: CopyReveal,
}

/// A stage populated from a [`SceneDef`].
#[derive(Debug)]
pub struct Scene {
    /// Stage holding every block.
    pub stage: Stage,
    /// Blocks in definition order.
    pub blocks: Vec<SceneBlock>,
}

/// Point-in-time view of one block.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlockSnapshot {
    /// Block id.
    pub id: String,
    /// Trigger state of the block's run.
    pub trigger: TriggerState,
    /// Number of glyph units of the live run.
    pub units: usize,
    /// Current offset of each unit in percent; 0 is at rest.
    pub offsets: Vec<f64>,
}

/// Point-in-time view of a whole scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSnapshot {
    /// Stage clock in seconds.
    pub time: f64,
    /// Scroll offset.
    pub scroll_y: f64,
    /// One entry per block, in definition order.
    pub blocks: Vec<BlockSnapshot>,
}

impl Scene {
    /// Block with id `id`.
    pub fn block(&self, id: &str) -> Option<&SceneBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Capture trigger states and unit offsets of every block.
    pub fn snapshot(&self) -> SceneSnapshot {
        let doc = self.stage.document();
        let blocks = self
            .blocks
            .iter()
            .map(|b| {
                let units = b.reveal.units();
                BlockSnapshot {
                    id: b.id.clone(),
                    trigger: b.reveal.trigger_state(&self.stage),
                    units: units.len(),
                    offsets: units
                        .iter()
                        .map(|u| unit_offset(doc, u.node).unwrap_or(0.0))
                        .collect(),
                }
            })
            .collect();
        SceneSnapshot {
            time: self.stage.now(),
            scroll_y: self.stage.scroll_y(),
            blocks,
        }
    }

    /// Unmount every block, restoring the original text.
    pub fn unmount_all(&mut self) {
        for b in &mut self.blocks {
            b.reveal.unmount(&mut self.stage);
        }
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.unmount_all();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
