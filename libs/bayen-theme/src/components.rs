//! Per-component style overrides
//!
//! Each of the eight component categories gets one [`ComponentStyleRule`]
//! built from an already resolved palette. Rules never look at the mode; any
//! mode difference comes from the palette tokens they read.
//!
//! The submodules also provide iced style functions built from the same
//! tokens, for native renderers.

pub mod accents;
pub mod button;
pub mod input;
pub mod surface;

pub use accents::*;
pub use button::*;
pub use input::*;
pub use surface::*;

use crate::colors::PaletteTokens;
use crate::style::{Declaration, DeclarationMap, StyleValue};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Component categories styled by the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Top application bar
    SurfaceBar,
    Button,
    Card,
    /// Paper surfaces (menus, dialogs, sheets)
    Panel,
    TextInput,
    Avatar,
    Badge,
    Tooltip,
}

impl ComponentKind {
    /// All categories in rule order
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::SurfaceBar,
        ComponentKind::Button,
        ComponentKind::Card,
        ComponentKind::Panel,
        ComponentKind::TextInput,
        ComponentKind::Avatar,
        ComponentKind::Badge,
        ComponentKind::Tooltip,
    ];

    /// Key used in the exported theme
    pub fn key(self) -> &'static str {
        match self {
            ComponentKind::SurfaceBar => "surfaceBar",
            ComponentKind::Button => "button",
            ComponentKind::Card => "card",
            ComponentKind::Panel => "panel",
            ComponentKind::TextInput => "textInput",
            ComponentKind::Avatar => "avatar",
            ComponentKind::Badge => "badge",
            ComponentKind::Tooltip => "tooltip",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Interaction state a block applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Hover,
    Focus,
}

impl InteractionState {
    pub fn pseudo_class(self) -> &'static str {
        match self {
            InteractionState::Hover => ":hover",
            InteractionState::Focus => ":focus-within",
        }
    }
}

/// Declarations for one slot of a component, optionally scoped to an
/// interaction state and a descendant part
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBlock {
    /// Component slot, e.g. `root` or `containedPrimary`
    pub slot: &'static str,
    pub state: Option<InteractionState>,
    /// Descendant element the declarations target
    pub part: Option<&'static str>,
    pub declarations: Vec<Declaration>,
}

impl StyleBlock {
    pub fn new(slot: &'static str) -> Self {
        Self {
            slot,
            state: None,
            part: None,
            declarations: Vec::new(),
        }
    }

    pub fn on(mut self, state: InteractionState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn part(mut self, part: &'static str) -> Self {
        self.part = Some(part);
        self
    }

    pub fn with(mut self, property: &'static str, value: impl Into<StyleValue>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        crate::style::find(&self.declarations, property)
    }

    /// Key of a state or part block inside its slot, e.g. `&:hover`,
    /// `& .notched-outline` or `&:focus-within .notched-outline`
    ///
    /// `None` for the slot's base block, whose declarations sit directly in
    /// the slot.
    pub fn nested_key(&self) -> Option<String> {
        if self.state.is_none() && self.part.is_none() {
            return None;
        }

        let mut key = "&".to_string();
        if let Some(state) = self.state {
            key.push_str(state.pseudo_class());
        }
        if let Some(part) = self.part {
            key.push_str(" .");
            key.push_str(part);
        }
        Some(key)
    }
}

/// Value of a component default property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Text(&'static str),
}

/// Style overrides and default properties for one component category
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStyleRule {
    pub kind: ComponentKind,
    pub blocks: Vec<StyleBlock>,
    pub default_props: Vec<(&'static str, PropValue)>,
}

impl ComponentStyleRule {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            blocks: Vec::new(),
            default_props: Vec::new(),
        }
    }

    pub fn block(mut self, block: StyleBlock) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn default_prop(mut self, name: &'static str, value: PropValue) -> Self {
        self.default_props.push((name, value));
        self
    }

    /// Find the block for a slot, state and part
    pub fn find(
        &self,
        slot: &str,
        state: Option<InteractionState>,
        part: Option<&str>,
    ) -> Option<&StyleBlock> {
        self.blocks
            .iter()
            .find(|b| b.slot == slot && b.state == state && b.part == part)
    }

    /// Base (stateless, partless) block for a slot
    pub fn slot(&self, slot: &str) -> Option<&StyleBlock> {
        self.find(slot, None, None)
    }

    pub fn prop(&self, name: &str) -> Option<PropValue> {
        self.default_props
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }
}

impl Serialize for ComponentStyleRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // One entry per slot; state and part blocks nest inside it.
        struct Overrides<'a>(&'a [StyleBlock]);

        impl Serialize for Overrides<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut slots: Vec<&str> = Vec::new();
                for block in self.0 {
                    if !slots.contains(&block.slot) {
                        slots.push(block.slot);
                    }
                }

                let mut map = serializer.serialize_map(Some(slots.len()))?;
                for slot in slots {
                    map.serialize_entry(slot, &Slot(slot, self.0))?;
                }
                map.end()
            }
        }

        struct Slot<'a>(&'a str, &'a [StyleBlock]);

        impl Serialize for Slot<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let (slot, all) = (self.0, self.1);
                let blocks = move || all.iter().filter(move |b| b.slot == slot);

                let mut map = serializer.serialize_map(None)?;
                for block in blocks().filter(|b| b.nested_key().is_none()) {
                    for declaration in &block.declarations {
                        map.serialize_entry(declaration.property, &declaration.value)?;
                    }
                }
                for block in blocks() {
                    if let Some(key) = block.nested_key() {
                        map.serialize_entry(&key, &DeclarationMap(&block.declarations))?;
                    }
                }
                map.end()
            }
        }

        struct Props<'a>(&'a [(&'static str, PropValue)]);

        impl Serialize for Props<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (name, value) in self.0 {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }

        let len = if self.default_props.is_empty() { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("styleOverrides", &Overrides(&self.blocks))?;
        if !self.default_props.is_empty() {
            map.serialize_entry("defaultProps", &Props(&self.default_props))?;
        }
        map.end()
    }
}

/// Build the rules for every category, in [`ComponentKind::ALL`] order
pub fn component_rules(palette: &PaletteTokens) -> Vec<ComponentStyleRule> {
    ComponentKind::ALL
        .iter()
        .map(|&kind| match kind {
            ComponentKind::SurfaceBar => surface::surface_bar_rule(palette),
            ComponentKind::Button => button::button_rule(palette),
            ComponentKind::Card => surface::card_rule(palette),
            ComponentKind::Panel => surface::panel_rule(),
            ComponentKind::TextInput => input::text_input_rule(palette),
            ComponentKind::Avatar => accents::avatar_rule(),
            ComponentKind::Badge => accents::badge_rule(palette),
            ComponentKind::Tooltip => accents::tooltip_rule(palette),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn test_one_rule_per_category_in_order() {
        let rules = component_rules(&LIGHT_PALETTE);
        let kinds: Vec<ComponentKind> = rules.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, ComponentKind::ALL.to_vec());
    }

    #[test]
    fn test_nested_keys() {
        let block = StyleBlock::new("root")
            .on(InteractionState::Hover)
            .part("notched-outline");
        assert_eq!(block.nested_key().as_deref(), Some("&:hover .notched-outline"));
        assert_eq!(
            StyleBlock::new("root").part("notched-outline").nested_key().as_deref(),
            Some("& .notched-outline")
        );
        assert_eq!(StyleBlock::new("containedPrimary").nested_key(), None);
    }

    #[test]
    fn test_shape_rules_do_not_vary_by_mode() {
        let light = component_rules(&LIGHT_PALETTE);
        let dark = component_rules(&DARK_PALETTE);
        for kind in [ComponentKind::Panel, ComponentKind::Avatar] {
            let index = kind as usize;
            assert_eq!(light[index], dark[index]);
        }
    }

    #[test]
    fn test_rule_serializes_overrides_and_props() {
        let json = serde_json::to_value(button::button_rule(&LIGHT_PALETTE)).unwrap();
        assert_eq!(json["styleOverrides"]["root"]["border-radius"], "12px");
        assert_eq!(json["defaultProps"]["disableElevation"], true);

        let card = serde_json::to_value(surface::card_rule(&LIGHT_PALETTE)).unwrap();
        assert!(card.get("defaultProps").is_none());
    }

    #[test]
    fn test_states_nest_inside_their_slot() {
        let json = serde_json::to_value(button::button_rule(&LIGHT_PALETTE)).unwrap();
        let overrides = json["styleOverrides"].as_object().unwrap();
        let slots: Vec<&str> = overrides.keys().map(String::as_str).collect();
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|slot| !slot.contains(':')));
        assert_eq!(overrides["containedPrimary"]["&:hover"]["transform"], "translateY(-1px)");
        assert_eq!(overrides["containedPrimary"]["&:hover"]["background-position"], "100% 0%");
        assert_eq!(overrides["containedPrimary"]["background-size"], "200% 200%");
    }

    #[test]
    fn test_input_outline_states_nest_under_root() {
        let json = serde_json::to_value(input::text_input_rule(&DARK_PALETTE)).unwrap();
        let overrides = json["styleOverrides"].as_object().unwrap();
        assert_eq!(overrides.len(), 1);

        let root = &overrides["root"];
        assert_eq!(root["border-radius"], "10px");
        assert_eq!(root["& .notched-outline"]["border-color"], "rgba(255, 255, 255, 0.06)");
        assert_eq!(root["&:hover .notched-outline"]["border-color"], "rgba(255, 255, 255, 0.12)");
        assert_eq!(root["&:focus-within .notched-outline"]["border-color"], "#9a7cff");
    }
}
