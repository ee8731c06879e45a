use crate::config::*;
use crate::scene::SceneLayout;
use crate::schedule::InGameSet;
use crate::score::Score;
use crate::state::GameState;
use bevy::prelude::*;
use bevy::sprite::Anchor;

const LABEL_Z: f32 = 10.0;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), setup_labels).add_systems(
            Update,
            refresh_labels.in_set(InGameSet::UiUpdates).run_if(resource_changed::<Score>),
        );
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLabel {
    Current,
    Best,
}

impl ScoreLabel {
    pub fn text(&self, score: &Score) -> String {
        match self {
            ScoreLabel::Current => format!("Score: {}", score.current()),
            ScoreLabel::Best => format!("Best Score: {}", score.best()),
        }
    }
}

fn label(kind: ScoreLabel, score: &Score, font_size: f32, justify: JustifyText, anchor: Anchor, at: Vec2) -> impl Bundle {
    let text_style = TextStyle { font_size, color: LABEL_COLOR, ..default() };
    (
        kind,
        Text2dBundle {
            text: Text::from_section(kind.text(score), text_style).with_justify(justify),
            text_anchor: anchor,
            transform: Transform::from_translation(at.extend(LABEL_Z)),
            ..default()
        },
    )
}

fn setup_labels(mut commands: Commands, layout: Res<SceneLayout>, score: Res<Score>) {
    let mid = layout.mid();
    commands.spawn(label(
        ScoreLabel::Current,
        &score,
        SCORE_FONT_SIZE,
        JustifyText::Center,
        Anchor::Center,
        Vec2::new(mid.x, mid.y + SCORE_LABEL_OFFSET_Y),
    ));
    commands.spawn(label(
        ScoreLabel::Best,
        &score,
        BEST_SCORE_FONT_SIZE,
        JustifyText::Left,
        Anchor::CenterLeft,
        Vec2::new(layout.min_x() + BEST_SCORE_MARGIN_X, layout.max_y() - BEST_SCORE_MARGIN_Y),
    ));
}

fn refresh_labels(score: Res<Score>, mut labels: Query<(&ScoreLabel, &mut Text)>) {
    for (label, mut text) in &mut labels {
        if let Some(section) = text.sections.first_mut() {
            section.value = label.text(&score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_text(app: &mut App, kind: ScoreLabel) -> String {
        app.world_mut()
            .query::<(&ScoreLabel, &Text)>()
            .iter(app.world())
            .find(|(label, _)| **label == kind)
            .map(|(_, text)| text.sections[0].value.clone())
            .unwrap()
    }

    #[test]
    fn labels_mirror_score() {
        let mut score = Score::default();
        score.restore_best(4);

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(SceneLayout::builtin())
            .insert_resource(score)
            .add_systems(Startup, setup_labels)
            .add_systems(Update, refresh_labels.run_if(resource_changed::<Score>));
        app.update();

        assert_eq!(label_text(&mut app, ScoreLabel::Current), "Score: 0");
        assert_eq!(label_text(&mut app, ScoreLabel::Best), "Best Score: 4");

        for _ in 0..6 {
            app.world_mut().resource_mut::<Score>().record_hit();
        }
        app.update();

        assert_eq!(label_text(&mut app, ScoreLabel::Current), "Score: 6");
        assert_eq!(label_text(&mut app, ScoreLabel::Best), "Best Score: 6");

        app.world_mut().resource_mut::<Score>().reset();
        app.update();

        assert_eq!(label_text(&mut app, ScoreLabel::Current), "Score: 0");
        assert_eq!(label_text(&mut app, ScoreLabel::Best), "Best Score: 6");
    }

    #[test]
    fn best_label_sits_in_top_left_corner() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(SceneLayout::builtin())
            .init_resource::<Score>()
            .add_systems(Update, setup_labels);
        app.update();

        let (_, transform, anchor) = app
            .world_mut()
            .query::<(&ScoreLabel, &Transform, &Anchor)>()
            .iter(app.world())
            .find(|(label, _, _)| **label == ScoreLabel::Best)
            .unwrap();
        assert_eq!(transform.translation.truncate(), Vec2::new(-647.0, 275.0));
        assert_eq!(*anchor, Anchor::CenterLeft);
    }
}
