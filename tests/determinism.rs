use drapery::{Curtain, CurtainConfig, FixedStepDriver, LogStepObserver, NoOpStepObserver, Vec2};

fn scripted_run() -> Vec<Vec<Vec2<f32>>> {
    let mut curtain: Curtain<f32> = Curtain::new(640.0, 360.0, CurtainConfig::new());
    curtain.open();
    for tick in 0..90 {
        let x = 100.0 + tick as f32 * 4.0;
        curtain.set_pointer(x, 120.0, tick % 30 < 20);
        if tick == 60 {
            curtain.close();
        }
        curtain.step(&mut NoOpStepObserver);
    }
    curtain.frames().into_iter().map(|f| f.positions).collect()
}

#[test]
fn curtain_deterministic() {
    let first = scripted_run();
    for _ in 0..3 {
        let again = scripted_run();
        for (a, b) in first.iter().flatten().zip(again.iter().flatten()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}

#[test]
fn only_last_pointer_update_per_tick_counts() {
    let config = CurtainConfig::new();
    let mut bursty: Curtain<f64> = Curtain::new(400.0, 300.0, config.clone());
    let mut single: Curtain<f64> = Curtain::new(400.0, 300.0, config);

    for tick in 0..30 {
        let y = 40.0 + tick as f64 * 3.0;
        for i in 0..10 {
            bursty.pointer().move_to(i as f64 * 37.0, 500.0 - y);
            bursty.pointer().set_active(i % 2 == 0);
        }
        bursty.pointer().move_to(180.0, y);
        bursty.pointer().set_active(true);
        single.set_pointer(180.0, y, true);

        bursty.step(&mut NoOpStepObserver);
        single.step(&mut NoOpStepObserver);
    }

    assert_eq!(bursty.frames(), single.frames());
}

#[test]
fn driver_ticks_match_manual_stepping() {
    let mut driven: Curtain<f32> = Curtain::new(300.0, 300.0, CurtainConfig::new());
    let mut manual: Curtain<f32> = Curtain::new(300.0, 300.0, CurtainConfig::new());
    driven.open();
    manual.open();

    let mut driver = FixedStepDriver::new(45);
    let mut observer = LogStepObserver::new();
    let ticks = driven.run(&mut driver, &mut observer);
    for _ in 0..45 {
        manual.step(&mut NoOpStepObserver);
    }

    assert_eq!(ticks, 45);
    assert_eq!(observer.ticks(), 45);
    assert_eq!(driven.frames(), manual.frames());
}
