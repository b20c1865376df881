// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use num_traits::PrimInt;

/**
 * Calculates `n!` by straightforward recursion.
 *
 * `factorial(0)` is 1 by convention. For `n > 0` the result is
 * `n * factorial(n - 1)`.
 *
 * Recursion depth equals `n` and the multiply is unchecked, so a large enough
 * `n` exhausts the call stack and a merely moderate one overflows the result
 * type. Negative `n` is not meaningful here; callers validate their input
 * before calling.
 */
pub fn factorial<T: PrimInt>(n: T) -> T {
    if n.is_zero() {
        T::one()
    } else {
        n * factorial(n - T::one())
    }
}
