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

/*!
 * Trait form of the factorial operation.
 *
 * This allows callers to write:
 *
 * ```
 * use factorial::Factorial;
 * assert_eq!(5u64.factorial(), 120);
 * ```
 *
 * instead of going through the free function. The blanket impl covers every
 * primitive integer type.
 */

use num_traits::PrimInt;

use fact;

pub trait Factorial {
    fn factorial(self) -> Self;
}

impl<T: PrimInt> Factorial for T {
    fn factorial(self) -> Self {
        fact::factorial(self)
    }
}
