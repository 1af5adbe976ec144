use std::collections::{BTreeMap, HashMap};

use common::error::{ApiError, ApiResult};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Coupon {
    pub id: i64,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

/// 优惠券存储接口
///
/// 实现本身不做同步, 并发访问由调用方加锁串行化写操作
pub trait CouponStore: Send + Sync {
    /// 全部记录, 按插入顺序
    fn list(&self) -> Vec<Coupon>;

    fn find_by_id(&self, id: i64) -> Option<Coupon>;

    fn exists_by_id(&self, id: i64) -> bool {
        self.find_by_id(id).is_some()
    }

    /// 名称忽略大小写查找
    fn find_id_by_name_ci(&self, name: &str) -> Option<i64>;

    fn exists_by_name_ci(&self, name: &str) -> bool {
        self.find_id_by_name_ci(name).is_some()
    }

    /// 最大 id + 1, 空表时为 1
    fn next_id(&self) -> i64;

    fn insert(&mut self, coupon: Coupon) -> ApiResult<()>;

    fn replace(&mut self, id: i64, coupon: Coupon) -> ApiResult<()>;

    fn remove(&mut self, id: i64) -> ApiResult<Coupon>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 内存存储: id 单调递增, 因此 BTreeMap 的顺序即插入顺序
#[derive(Debug, Default)]
pub struct MemoryCouponStore {
    coupons: BTreeMap<i64, Coupon>,
    names: HashMap<String, i64>,
}

impl MemoryCouponStore {
    /// 演示数据
    pub fn seeded() -> Self {
        let mut store = Self::default();
        for (id, name, percent) in [(1, "10OFF", 10), (2, "20OFF", 20), (3, "30OFF", 30)] {
            store.coupons.insert(
                id,
                Coupon {
                    id,
                    name: name.to_string(),
                    percent,
                    is_active: true,
                },
            );
            store.names.insert(name_key(name), id);
        }

        store
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl CouponStore for MemoryCouponStore {
    fn list(&self) -> Vec<Coupon> {
        self.coupons.values().cloned().collect::<Vec<Coupon>>()
    }

    fn find_by_id(&self, id: i64) -> Option<Coupon> {
        self.coupons.get(&id).cloned()
    }

    fn exists_by_id(&self, id: i64) -> bool {
        self.coupons.contains_key(&id)
    }

    fn find_id_by_name_ci(&self, name: &str) -> Option<i64> {
        self.names.get(&name_key(name)).copied()
    }

    fn next_id(&self) -> i64 {
        self.coupons.keys().next_back().map_or(1, |id| id + 1)
    }

    fn insert(&mut self, coupon: Coupon) -> ApiResult<()> {
        if self.coupons.contains_key(&coupon.id) {
            return Err(ApiError::Error(format!(
                "coupon id {} already exists",
                coupon.id
            )));
        }
        if self.exists_by_name_ci(&coupon.name) {
            return Err(ApiError::NameNotUnique);
        }

        self.names.insert(name_key(&coupon.name), coupon.id);
        self.coupons.insert(coupon.id, coupon);
        Ok(())
    }

    fn replace(&mut self, id: i64, mut coupon: Coupon) -> ApiResult<()> {
        let old_name = match self.coupons.get(&id) {
            Some(old) => old.name.clone(),
            None => return Err(ApiError::UpdateTargetMissing(id)),
        };
        if matches!(self.find_id_by_name_ci(&coupon.name), Some(owner) if owner != id) {
            return Err(ApiError::NameNotUnique);
        }

        coupon.id = id;
        self.names.remove(&name_key(&old_name));
        self.names.insert(name_key(&coupon.name), id);
        self.coupons.insert(id, coupon);
        Ok(())
    }

    fn remove(&mut self, id: i64) -> ApiResult<Coupon> {
        let coupon = self.coupons.remove(&id).ok_or(ApiError::NotFound(id))?;
        self.names.remove(&name_key(&coupon.name));
        Ok(coupon)
    }

    fn len(&self) -> usize {
        self.coupons.len()
    }
}
