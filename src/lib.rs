//  ____  ____     __        __    _____           _
// |  _ \|  _ \ __ \ \      / /__ |_   _|__   ___ | |
// | |_) | |_) / _` \ \ /\ / / _ \  | |/ _ \ / _ \| |
// |  _ <|  __/ (_| |\ V  V / (_) | | | (_) | (_) | |
// |_| \_\_|   \__,_| \_/\_/ \___/  |_|\___/ \___/|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A password generation and strength testing toolkit.

pub mod commands;
pub mod passcheck;
pub mod passgen;
pub mod setclip;
