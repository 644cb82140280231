use std::cell::RefCell;

thread_local! {
    pub static PERF_RAYS_CAST: RefCell<u64> = RefCell::new(0);
    pub static PERF_RAY_HITS: RefCell<u64> = RefCell::new(0);
}

pub fn reset_controller_perf_counters() {
    PERF_RAYS_CAST.with(|c| *c.borrow_mut() = 0);
    PERF_RAY_HITS.with(|c| *c.borrow_mut() = 0);
}

pub fn take_controller_perf_counters() -> (u64, u64) {
    let rays = PERF_RAYS_CAST.with(|c| {
        let v = *c.borrow();
        *c.borrow_mut() = 0;
        v
    });
    let hits = PERF_RAY_HITS.with(|c| {
        let v = *c.borrow();
        *c.borrow_mut() = 0;
        v
    });
    (rays, hits)
}
