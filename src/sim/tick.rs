//! Fixed timestep simulation tick
//!
//! Advances a running session by one frame: difficulty ramp, spawning,
//! player physics, collisions and scoring. Entities are removed with
//! `retain_mut` so nothing is dropped from a collection mid-iteration.

use super::state::{GameEvent, GamePhase, GameState, PowerUpKind};
use crate::consts::*;

/// Advance the game state by one tick. Does nothing unless playing.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Difficulty ramp
    state.scroll_speed += DIFFICULTY_INCREMENT;
    state.distance += state.scroll_speed / 10.0;
    state.background.update(state.scroll_speed);

    spawn(state, &mut events);

    state.player.update();

    let speed = state.scroll_speed;
    let player_box = state.player.bounds();
    let player_x = state.player.pos.x;

    state.obstacles.retain_mut(|ob| {
        ob.speed = speed;
        ob.update();
        if ob.is_offscreen() {
            return false;
        }

        if ob.rect.intersects(&player_box) {
            if state.player.has_shield() {
                events.push(GameEvent::ShieldAbsorbed);
                return false;
            }
            if state.phase != GamePhase::GameOver {
                state.phase = GamePhase::GameOver;
                events.push(GameEvent::Crashed);
            }
        }

        if !ob.passed && (ob.rect.right() as f32) < player_x {
            ob.passed = true;
            state.score += OBSTACLE_PASS_SCORE;
            events.push(GameEvent::ObstaclePassed);
        }
        true
    });

    state.coins.retain_mut(|coin| {
        coin.speed = speed;
        coin.update();
        if coin.is_offscreen() {
            return false;
        }

        if !coin.collected && coin.bounds().intersects(&player_box) {
            coin.collected = true;
            state.score += COIN_SCORE;
            events.push(GameEvent::CoinCollected);
            return false;
        }
        true
    });

    state.powerups.retain_mut(|power| {
        power.speed = speed;
        power.update();
        if power.is_offscreen() {
            return false;
        }

        if power.bounds().intersects(&player_box) {
            power.kind.apply(&mut state.player);
            events.push(GameEvent::PowerUpCollected(power.kind));
            return false;
        }
        true
    });

    state.score += (state.scroll_speed / SPEED_BONUS_DIVISOR) as u64;

    events
}

/// Run the three spawn timers
fn spawn(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.obstacle_timer += 1;
    if state.obstacle_timer as i32 > state.obstacle_spawn_threshold() {
        state.spawn_obstacle();
        state.obstacle_timer = 0;
        events.push(GameEvent::ObstacleSpawned);
    }

    state.coin_timer += 1;
    if state.coin_timer > COIN_SPAWN_TICKS {
        state.spawn_coin();
        state.coin_timer = 0;
        events.push(GameEvent::CoinSpawned);
    }

    state.powerup_timer += 1;
    if state.powerup_timer > POWERUP_SPAWN_TICKS {
        state.spawn_powerup(PowerUpKind::Shield);
        state.powerup_timer = 0;
        events.push(GameEvent::PowerUpSpawned(PowerUpKind::Shield));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coin, Obstacle, PowerUp};

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345);
        state.start();
        state
    }

    /// Tick with the spawn timers held back so only hand-placed entities exist
    fn quiet_tick(state: &mut GameState) -> Vec<GameEvent> {
        state.obstacle_timer = 0;
        state.coin_timer = 0;
        state.powerup_timer = 0;
        tick(state)
    }

    #[test]
    fn test_no_update_unless_playing() {
        let mut state = GameState::new(1);
        let before = state.scroll_speed;
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.scroll_speed, before);
        assert_eq!(state.time_ticks, 0);

        state.start();
        tick(&mut state);
        state.toggle_pause();
        let paused_speed = state.scroll_speed;
        let paused_y = state.player.pos.y;
        for _ in 0..30 {
            tick(&mut state);
        }
        assert_eq!(state.scroll_speed, paused_speed);
        assert_eq!(state.player.pos.y, paused_y);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_speed_and_distance_ramp() {
        let mut state = playing_state();
        let mut last = state.scroll_speed;
        for _ in 0..100 {
            quiet_tick(&mut state);
            assert!(state.scroll_speed > last);
            last = state.scroll_speed;
        }
        assert!((state.scroll_speed - (START_SPEED + 100.0 * DIFFICULTY_INCREMENT)).abs() < 1e-4);
        assert!(state.distance > 60.0 && state.distance < 61.0);
    }

    #[test]
    fn test_spawn_timers() {
        let mut state = playing_state();
        let mut obstacle_at = None;
        let mut coin_at = None;
        for t in 1..=60u32 {
            let events = tick(&mut state);
            if obstacle_at.is_none() && events.contains(&GameEvent::ObstacleSpawned) {
                obstacle_at = Some(t);
            }
            if coin_at.is_none() && events.contains(&GameEvent::CoinSpawned) {
                coin_at = Some(t);
            }
        }
        // Thresholds are exclusive: 52 at starting speed, 40 for coins
        assert_eq!(obstacle_at, Some(53));
        assert_eq!(coin_at, Some(41));
    }

    #[test]
    fn test_powerup_spawns_after_long_interval() {
        let mut state = playing_state();
        state.powerup_timer = POWERUP_SPAWN_TICKS;
        state.obstacle_timer = 0;
        state.coin_timer = 0;
        let events = tick(&mut state);
        assert!(events.contains(&GameEvent::PowerUpSpawned(PowerUpKind::Shield)));
        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.powerup_timer, 0);
    }

    #[test]
    fn test_passing_obstacle_scores_once() {
        let mut state = playing_state();
        state
            .obstacles
            .push(Obstacle::new(1000, 50, 40, state.scroll_speed));

        let mut passed_events = 0;
        for _ in 0..200 {
            let ob_left = state.obstacles.first().map(|o| o.rect.left());
            if let Some(left) = ob_left {
                let player_right = state.player.bounds().right();
                if state.player.on_ground && left > player_right && left - player_right <= 24 {
                    state.player.jump();
                }
            }
            let events = quiet_tick(&mut state);
            passed_events += events
                .iter()
                .filter(|e| **e == GameEvent::ObstaclePassed)
                .count();
            if state.obstacles.first().is_some_and(|o| o.passed) {
                break;
            }
        }

        assert!(state.is_playing());
        assert_eq!(passed_events, 1);
        assert_eq!(state.score, 5);
        assert!(state.obstacles[0].passed);
        assert!(state.obstacles[0].rect.right() < PLAYER_X);

        // Further ticks never award the same obstacle again
        for _ in 0..20 {
            quiet_tick(&mut state);
        }
        assert_eq!(state.score, 5);
    }

    #[test]
    fn test_unshielded_crash_ends_run() {
        let mut state = playing_state();
        state
            .obstacles
            .push(Obstacle::new(PLAYER_X + 10, 50, 60, state.scroll_speed));
        let events = quiet_tick(&mut state);
        assert!(events.contains(&GameEvent::Crashed));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.is_playing());
        assert_eq!(state.obstacles.len(), 1);

        // Frozen after the crash
        let speed = state.scroll_speed;
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.scroll_speed, speed);
    }

    #[test]
    fn test_shield_destroys_obstacle() {
        let mut state = playing_state();
        state.player.shield_ticks = SHIELD_TICKS;
        state
            .obstacles
            .push(Obstacle::new(PLAYER_X + 10, 50, 60, state.scroll_speed));
        let events = quiet_tick(&mut state);
        assert!(events.contains(&GameEvent::ShieldAbsorbed));
        assert!(state.is_playing());
        assert!(state.obstacles.is_empty());
        assert!(state.player.has_shield());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_coin_awards_ten_once() {
        let mut state = playing_state();
        let center_y = state.player.bounds().center().y;
        state
            .coins
            .push(Coin::new(PLAYER_X + 20, center_y, state.scroll_speed));
        let events = quiet_tick(&mut state);
        assert_eq!(events, vec![GameEvent::CoinCollected]);
        assert_eq!(state.score, 10);
        assert!(state.coins.is_empty());

        quiet_tick(&mut state);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_shield_pickup_sets_full_duration() {
        let mut state = playing_state();
        state.player.shield_ticks = 5;
        let center_y = state.player.bounds().center().y;
        state.powerups.push(PowerUp::new(
            PLAYER_X + 20,
            center_y,
            state.scroll_speed,
            PowerUpKind::Shield,
        ));
        let events = quiet_tick(&mut state);
        assert_eq!(events, vec![GameEvent::PowerUpCollected(PowerUpKind::Shield)]);
        assert_eq!(state.player.shield_ticks, 180);
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_offscreen_entities_removed() {
        let mut state = playing_state();
        state.obstacles.push(Obstacle::new(-90, 45, 50, 6.0));
        state.coins.push(Coin::new(-45, 100, 6.0));
        state
            .powerups
            .push(PowerUp::new(-45, 100, 6.0, PowerUpKind::Shield));
        quiet_tick(&mut state);
        assert!(state.obstacles.is_empty());
        assert!(state.coins.is_empty());
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_speed_bonus_truncates() {
        let mut state = playing_state();
        quiet_tick(&mut state);
        assert_eq!(state.score, 0);

        state.scroll_speed = 500.0;
        quiet_tick(&mut state);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_speed_written_into_existing_entities() {
        let mut state = playing_state();
        state.obstacles.push(Obstacle::new(800, 40, 40, 1.0));
        state.scroll_speed = 9.0;
        quiet_tick(&mut state);
        assert_eq!(state.obstacles[0].rect.x, 791);
        assert!((state.obstacles[0].speed - state.scroll_speed).abs() < f32::EPSILON);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        a.start();
        b.start();
        for t in 0..2000 {
            if t % 37 == 0 {
                a.player.jump();
                b.player.jump();
            }
            assert_eq!(tick(&mut a), tick(&mut b));
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
    }
}
