//! 按键排队的单飞闸门

use di_common::{SlotName, TypeKey};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

type FlightKey = (TypeKey, SlotName);

#[derive(Default)]
struct Gate {
    lock: Arc<Mutex<()>>,
    /// 正在持有或等待该闸门的调用方数量，只在外层锁内修改
    users: usize,
}

/// 单飞闸门集合
///
/// 同一键的调用方依次通过，不同键互不阻塞。没有调用方时闸门被移除。
#[derive(Default)]
pub(crate) struct SingleFlight {
    gates: Mutex<HashMap<FlightKey, Gate>>,
}

impl SingleFlight {
    /// 在该键的闸门内执行 `f`
    pub(crate) fn run<R>(&self, key: TypeKey, slot: &SlotName, f: impl FnOnce() -> R) -> R {
        let ticket = self.join((key, slot.clone()));
        let _held = ticket.lock.lock();
        f()
    }

    /// 当前存在的闸门数量
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.gates.lock().len()
    }

    fn join(&self, key: FlightKey) -> Ticket<'_> {
        let mut gates = self.gates.lock();
        let gate = gates.entry(key.clone()).or_default();
        gate.users += 1;
        if gate.users > 1 {
            trace!(type_name = key.0.name(), slot = %key.1, waiters = gate.users - 1, "等待进行中的构造");
        }
        Ticket {
            owner: self,
            lock: Arc::clone(&gate.lock),
            key,
        }
    }
}

struct Ticket<'a> {
    owner: &'a SingleFlight,
    lock: Arc<Mutex<()>>,
    key: FlightKey,
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        let mut gates = self.owner.gates.lock();
        if let Some(gate) = gates.get_mut(&self.key) {
            gate.users = gate.users.saturating_sub(1);
            if gate.users == 0 {
                gates.remove(&self.key);
            }
        }
    }
}
