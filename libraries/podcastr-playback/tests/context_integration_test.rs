//! Shared context integration tests
//!
//! Several UI consumers (player bar, episode list, episode page) hold
//! handles to one context and react to each other's changes.


use podcastr_playback::{PlayerConfig, PlayerContext, PlayerEvent};
use std::cell::RefCell;
use std::rc::Rc;
use test_helpers::{create_episodes, init_tracing};

fn record(context: &PlayerContext) -> Rc<RefCell<Vec<PlayerEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    context.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

#[test]
fn test_consumers_see_each_others_changes() {
    init_tracing();
    let context = PlayerContext::default();

    let episode_list = context.clone();
    let player_bar = context.clone();

    episode_list.play_list(create_episodes(3), 1).unwrap();

    assert!(player_bar.is_playing());
    assert_eq!(player_bar.current_index(), 1);
    assert!(player_bar.has_previous());
    assert!(player_bar.has_next());

    player_bar.play_next();
    assert_eq!(episode_list.current_index(), 2);
    assert_eq!(
        episode_list.current_episode().unwrap().title(),
        "Episode 3"
    );
}

#[test]
fn test_every_subscriber_gets_every_event() {
    init_tracing();
    let context = PlayerContext::default();
    let first = record(&context);
    let second = record(&context.clone());

    context.play_list(create_episodes(2), 0).unwrap();
    context.toggle_shuffle();

    let expected = vec![
        PlayerEvent::PlaylistLoaded { length: 2, index: 0 },
        PlayerEvent::EpisodeChanged {
            index: 0,
            title: "Episode 1".to_string(),
        },
        PlayerEvent::PlayingChanged { is_playing: true },
        PlayerEvent::ShufflingChanged { is_shuffling: true },
    ];

    assert_eq!(*first.borrow(), expected);
    assert_eq!(*second.borrow(), expected);
}

#[test]
fn test_audio_element_drives_context() {
    init_tracing();
    let context = PlayerContext::default();
    context.play_list(create_episodes(2), 0).unwrap();

    // Audio element reports pause, then play
    context.set_playing_state(false);
    assert!(!context.is_playing());
    context.set_playing_state(true);

    // Episode finishes twice: advance, then exhaust
    context.handle_episode_ended();
    assert_eq!(context.current_index(), 1);

    context.handle_episode_ended();
    assert!(context.is_idle());
    assert!(context.episodes().is_empty());
}

#[test]
fn test_listener_can_chain_operations() {
    init_tracing();
    let context = PlayerContext::default();
    let handle = context.clone();

    // Auto-advance whenever playback is paused, as a contrived chain
    context.subscribe(move |event| {
        if let PlayerEvent::PlayingChanged { is_playing: false } = event {
            handle.play_next();
        }
    });

    context.play_list(create_episodes(3), 0).unwrap();
    context.toggle_play();

    assert_eq!(context.current_index(), 1);
}

#[test]
fn test_later_subscribers_see_listener_changes_in_order() {
    init_tracing();
    let context = PlayerContext::default();
    let handle = context.clone();

    // Player bar pauses as soon as a new list arrives
    context.subscribe(move |event| {
        if let PlayerEvent::PlaylistLoaded { .. } = event {
            handle.set_playing_state(false);
        }
    });

    // Play button mirrors the playing flag from events only
    let mirrored = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&mirrored);
    context.subscribe(move |event| {
        if let PlayerEvent::PlayingChanged { is_playing } = event {
            *sink.borrow_mut() = Some(*is_playing);
        }
    });
    let events = record(&context);

    context.play_list(create_episodes(3), 0).unwrap();

    assert!(!context.is_playing());
    assert_eq!(*mirrored.borrow(), Some(context.is_playing()));
    assert_eq!(
        *events.borrow(),
        vec![
            PlayerEvent::PlaylistLoaded { length: 3, index: 0 },
            PlayerEvent::EpisodeChanged {
                index: 0,
                title: "Episode 1".to_string(),
            },
            PlayerEvent::PlayingChanged { is_playing: true },
            PlayerEvent::PlayingChanged { is_playing: false },
        ]
    );
}

#[test]
fn test_snapshot_matches_accessors() {
    init_tracing();
    let context = PlayerContext::new(PlayerConfig {
        looping: true,
        ..Default::default()
    });
    context.play_list(create_episodes(4), 3).unwrap();

    let snapshot = context.snapshot();
    assert_eq!(snapshot.episode_list, context.episodes());
    assert_eq!(snapshot.current_episode_index, context.current_index());
    assert_eq!(snapshot.current_episode, context.current_episode());
    assert_eq!(snapshot.is_playing, context.is_playing());
    assert_eq!(snapshot.is_looping, context.is_looping());
    assert_eq!(snapshot.is_shuffling, context.is_shuffling());
    assert_eq!(snapshot.has_previous, context.has_previous());
    assert_eq!(snapshot.has_next, context.has_next());
}

#[test]
fn test_snapshot_serializes_for_front_end() {
    init_tracing();
    let context = PlayerContext::default();
    context.play_list(create_episodes(2), 1).unwrap();

    let value = serde_json::to_value(context.snapshot()).unwrap();

    assert_eq!(value["currentEpisodeIndex"], 1);
    assert_eq!(value["isPlaying"], true);
    assert_eq!(value["hasNext"], false);
    assert_eq!(value["hasPrevious"], true);
    assert_eq!(value["episodeList"].as_array().unwrap().len(), 2);
    assert_eq!(value["currentEpisode"]["title"], "Episode 2");
    assert_eq!(value["currentEpisode"]["duration"], 1802);
}

#[test]
fn test_teardown_ends_session() {
    init_tracing();
    let context = PlayerContext::default();
    let events = record(&context);
    let other = context.clone();

    context.play_list(create_episodes(3), 2).unwrap();
    context.toggle_shuffle();
    events.borrow_mut().clear();

    other.teardown();

    assert_eq!(*events.borrow(), vec![PlayerEvent::TornDown]);
    assert!(context.is_idle());
    assert!(!context.is_playing());
    assert!(!context.is_shuffling());
    assert_eq!(context.subscriber_count(), 0);

    // Context is still usable for a new session
    context.play_list(create_episodes(1), 0).unwrap();
    assert!(context.is_playing());
    assert_eq!(events.borrow().len(), 1);
}
