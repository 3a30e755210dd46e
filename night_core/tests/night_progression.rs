use night_core::{
    ActorId, ChallengeFlags, Director, NightClock, NightContext, NightFlags, TimeEventRegistry,
};

const TICK: f32 = 0.5;
const TICK_GUARD: usize = 100_000;

fn new_run(seed: u64) -> (Director, NightContext, TimeEventRegistry) {
    let registry = TimeEventRegistry::with_builtin();
    let ctx = NightContext::with_standard_cast(seed);
    // One in-game minute per real second keeps the run short.
    let director = Director::with_clock(NightClock::with_rate(1.0));
    (director, ctx, registry)
}

fn tick_to_win(director: &mut Director, ctx: &mut NightContext) {
    let mut ticks = 0;
    while !director.night_over() {
        director.tick(ctx, TICK);
        ticks += 1;
        assert!(ticks < TICK_GUARD, "night never reached the win time");
    }
    director.on_win(ctx);
}

#[test]
fn winning_night_one_unlocks_night_two() {
    let (mut director, mut ctx, registry) = new_run(11);
    director.select_night(&registry, &mut ctx, 1);
    tick_to_win(&mut director, &mut ctx);

    assert!(ctx.completion().has_night(NightFlags::NIGHT_1));
    assert_eq!(ctx.completion().next_night(), 2);
    // The 5 AM schedule is the last one applied.
    assert_eq!(ctx.roster().difficulty(ActorId::Strummer), 6);
    assert_eq!(ctx.roster().difficulty(ActorId::Songbird), 6);
    assert!(ctx.call_note().is_some());
}

#[test]
fn campaign_nights_chain_through_the_tracker() {
    let (mut director, mut ctx, registry) = new_run(12);
    for night in 1..=6 {
        director.select_night(&registry, &mut ctx, night);
        tick_to_win(&mut director, &mut ctx);
        director.clear(&mut ctx);
    }
    assert!(ctx.completion().all_nights(
        NightFlags::NIGHT_1
            | NightFlags::NIGHT_2
            | NightFlags::NIGHT_3
            | NightFlags::NIGHT_4
            | NightFlags::NIGHT_5
            | NightFlags::NIGHT_6
    ));
    assert_eq!(ctx.completion().next_night(), 7);
}

#[test]
fn custom_night_win_never_advances_the_campaign() {
    let (mut director, mut ctx, registry) = new_run(13);
    ctx.completion_mut().set_next_night(7);
    ctx.custom_night_mut().set_level(ActorId::Tangle, 20);
    ctx.custom_night_mut().set_level(ActorId::Marionette, 10);

    director.select_night(&registry, &mut ctx, 7);
    tick_to_win(&mut director, &mut ctx);

    assert!(!ctx.completion().has_night(NightFlags::NIGHT_7));
    assert_eq!(ctx.completion().next_night(), 7);
    assert_eq!(ctx.roster().difficulty(ActorId::Tangle), 20);
    assert_eq!(ctx.roster().difficulty(ActorId::Marionette), 10);
}

#[test]
fn night_five_surges_every_hour() {
    let (mut director, mut ctx, registry) = new_run(14);
    director.select_night(&registry, &mut ctx, 5);
    tick_to_win(&mut director, &mut ctx);

    let begins = ctx
        .events()
        .iter()
        .filter(|line| *line == "surge: begin")
        .count();
    assert_eq!(begins, 6);
    let blackouts = ctx
        .events()
        .iter()
        .filter(|line| *line == "surge: blackout")
        .count();
    // One tail per surge plus one per half-hour window.
    assert_eq!(blackouts, 12);
}

#[test]
fn encore_parks_the_crawler_in_the_office() {
    let (mut director, mut ctx, registry) = new_run(15);
    director.select_challenge(&registry, &mut ctx, 1);
    director.tick(&mut ctx, TICK);

    let vent = ctx.roster_mut().vent_mut(ActorId::Drifter).unwrap();
    assert!(vent.is_in_office());
    assert!(!vent.is_in_vent());
    assert_eq!(ctx.roster().difficulty(ActorId::Tangle), 50);

    tick_to_win(&mut director, &mut ctx);
    assert!(ctx.completion().has_challenge(ChallengeFlags::ENCORE));
    assert!(!ctx.completion().any_night(NightFlags::all()));
}

#[test]
fn shuffle_rerolls_inside_the_advertised_band() {
    let (mut director, mut ctx, registry) = new_run(16);
    director.select_challenge(&registry, &mut ctx, 3);
    tick_to_win(&mut director, &mut ctx);

    for id in ActorId::ALL {
        if id == ActorId::Marionette {
            assert_eq!(ctx.roster().difficulty(id), 10);
        } else {
            let value = ctx.roster().difficulty(id);
            assert!((1..=20).contains(&value), "{id:?} rolled {value}");
        }
    }
    assert!(ctx.completion().has_challenge(ChallengeFlags::SHUFFLE));
}

#[test]
fn overtime_runs_nine_hours() {
    let (mut director, mut ctx, registry) = new_run(17);
    director.select_challenge(&registry, &mut ctx, 4);
    assert_eq!(director.current_hours(), Some(9));

    tick_to_win(&mut director, &mut ctx);
    assert!(director.clock().minutes() >= 9.0 * 60.0);
    assert!(ctx.completion().has_challenge(ChallengeFlags::OVERTIME));
    assert_eq!(ctx.roster().difficulty(ActorId::Marionette), 10);
}

#[test]
fn blackout_sabotages_the_breaker_rows() {
    let (mut director, mut ctx, registry) = new_run(18);
    director.select_challenge(&registry, &mut ctx, 2);
    // Through the first half-hour window.
    for _ in 0..80 {
        director.tick(&mut ctx, 0.5);
    }

    let live = ctx
        .roster_mut()
        .breaker_mut(ActorId::Showman)
        .unwrap()
        .live_switch_count();
    assert!(live < 20, "no switch was sabotaged");

    tick_to_win(&mut director, &mut ctx);
    assert!(ctx.completion().has_challenge(ChallengeFlags::BLACKOUT));
}
