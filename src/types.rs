//! 距离类型定义
//!
//! 图的边权需要满足：可相加、可比较、存在零值和“无穷大”哨兵值

use std::fmt::{Debug, Display};
use std::ops::Add;

/// 边权（距离）类型
///
/// 无穷大取该类型的最大可表示值。Dijkstra 要求所有边权非负，
/// 这里不做检查。
pub trait Distance: Copy + PartialOrd + Add<Output = Self> + Debug + Display {
    /// 零距离
    fn zero() -> Self;

    /// 无穷大哨兵（不可达）
    fn infinity() -> Self;

    /// 是否为有限距离
    fn is_finite_distance(&self) -> bool {
        *self != Self::infinity()
    }

    /// 饱和加法：任一操作数为无穷大时结果为无穷大
    fn saturating_sum(self, other: Self) -> Self {
        if !self.is_finite_distance() || !other.is_finite_distance() {
            return Self::infinity();
        }
        let sum = self + other;
        if sum < self {
            Self::infinity()
        } else {
            sum
        }
    }
}

macro_rules! impl_integer_distance {
    ($($t:ty),*) => {
        $(
            impl Distance for $t {
                fn zero() -> Self {
                    0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn saturating_sum(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_distance {
    ($($t:ty),*) => {
        $(
            impl Distance for $t {
                fn zero() -> Self {
                    0.0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn is_finite_distance(&self) -> bool {
                    self.is_finite() && *self != <$t>::MAX
                }
            }
        )*
    };
}

impl_integer_distance!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_distance!(f32, f64);
