//! Card Renderer - Per-creature view model and card markup
//!
//! A [`CardView`] is built once per creature and owns every piece of mutable
//! state of that card: flip state, sprite state and the back face. Cards never
//! share state with each other.

use serde::Serialize;
use tokio::sync::Mutex;

use crate::application::services::card_enrichment_service::CardBack;
use crate::application::services::sprite_resolver::{SpriteLoadOutcome, SpriteSlot};
use crate::domain::entities::Creature;
use crate::domain::value_objects::{CardVisualState, DexNumber, FlipState, SpriteVisualState};

#[derive(Debug, Default)]
struct CardInteraction {
    flip: FlipState,
    sprite: SpriteSlot,
}

/// Interactive flip card of one creature
#[derive(Debug)]
pub struct CardView {
    creature: Creature,
    interaction: Mutex<CardInteraction>,
    back: CardBack,
}

impl CardView {
    pub fn new(creature: Creature) -> Self {
        Self {
            creature,
            interaction: Mutex::new(CardInteraction::default()),
            back: CardBack::new(),
        }
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn number(&self) -> DexNumber {
        self.creature.number
    }

    pub fn back(&self) -> &CardBack {
        &self.back
    }

    /// Toggle between front and back; always succeeds
    pub async fn toggle_flip(&self) -> FlipState {
        let mut interaction = self.interaction.lock().await;
        interaction.flip = interaction.flip.toggled();
        interaction.flip
    }

    /// The image loader failed to load the current sprite URL
    pub async fn sprite_failed(&self, attempt: SpriteVisualState) -> SpriteLoadOutcome {
        let mut interaction = self.interaction.lock().await;
        interaction.sprite.load_failed(&self.creature, attempt)
    }

    /// The image loader failed to load the resolved card image
    pub async fn card_image_failed(&self) -> CardVisualState {
        self.back.image_failed().await
    }

    pub async fn snapshot(&self) -> CardSnapshot {
        let (flip, sprite) = {
            let interaction = self.interaction.lock().await;
            (interaction.flip, interaction.sprite)
        };
        let back = self.back.state().await;
        CardSnapshot::new(&self.creature, flip, sprite, &back)
    }
}

/// Back face of a card as shown to the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackFace {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub markup: String,
}

/// Point-in-time view of one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSnapshot {
    pub number: u32,
    pub label: String,
    pub name: String,
    pub sprite_url: Option<String>,
    pub sprite_state: SpriteVisualState,
    pub flip: FlipState,
    pub back: BackFace,
    pub markup: String,
}

impl CardSnapshot {
    fn new(
        creature: &Creature,
        flip: FlipState,
        sprite: SpriteSlot,
        back: &CardVisualState,
    ) -> Self {
        let caption = match back {
            CardVisualState::Resolved(card) => card.caption.clone(),
            _ => None,
        };
        let back = BackFace {
            state: back.kind(),
            image_url: back.image_url().map(str::to_string),
            caption,
            message: back.message(&creature.name),
            markup: render_back(creature, back),
        };
        let sprite_url = sprite.current_url(creature);
        let markup = render_card(creature, flip, sprite.state(), sprite_url.as_deref(), &back.markup);

        Self {
            number: creature.number.value(),
            label: creature.label(),
            name: creature.name.clone(),
            sprite_url,
            sprite_state: sprite.state(),
            flip,
            back,
            markup,
        }
    }
}

/// Markup of the back face contents
pub fn render_back(creature: &Creature, state: &CardVisualState) -> String {
    match state {
        CardVisualState::Resolved(card) => {
            let mut html = format!(
                r#"<img class="pokemon-card-image" src="{}" alt="{} TCG Card">"#,
                escape_html(&card.image_url),
                escape_html(&creature.name)
            );
            if let Some(caption) = &card.caption {
                html.push_str(&format!(
                    r#"<div class="pokemon-card-caption">{}</div>"#,
                    escape_html(caption)
                ));
            }
            html
        }
        other => format!(
            r#"<div class="pokemon-card-message">{}</div>"#,
            escape_html(&other.message(&creature.name).unwrap_or_default())
        ),
    }
}

/// Markup of the whole card, both faces
pub fn render_card(
    creature: &Creature,
    flip: FlipState,
    sprite_state: SpriteVisualState,
    sprite_url: Option<&str>,
    back_markup: &str,
) -> String {
    let mut classes = String::from("pokemon-card");
    if flip == FlipState::Flipped {
        classes.push_str(" flipped");
    }
    if sprite_state == SpriteVisualState::Errored {
        classes.push_str(" error");
    }

    let sprite = sprite_url
        .map(|url| {
            format!(
                r#"<img class="pokemon-sprite" src="{}" alt="{}">"#,
                escape_html(url),
                escape_html(&creature.name)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="{classes}" data-pokemon-number="{number}" data-sprite-state="{sprite_state}">"#,
            r#"<div class="pokemon-card-inner">"#,
            r#"<div class="pokemon-card-front">"#,
            r#"<div class="pokemon-number">{label}</div>{sprite}"#,
            r#"<div class="pokemon-name">{name}</div>"#,
            r#"</div>"#,
            r#"<div class="pokemon-card-back">{back}</div>"#,
            r#"</div></div>"#
        ),
        classes = classes,
        number = creature.number,
        sprite_state = sprite_state.as_str(),
        label = creature.label(),
        sprite = sprite,
        name = escape_html(&creature.name),
        back = back_markup,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
