//! Built-in skeletons for the generated Go files.
//!
//! Each skeleton carries the runtime lookup that matches the key layout its
//! generator emits. `--template` replaces them wholesale.

/// Placeholder used by every single-map template.
pub const MAP_PLACEHOLDER: &str = "#MAP#";

pub const COMPANIES_PLACEHOLDER: &str = "#COMPANIES#";
pub const SERVICES_PLACEHOLDER: &str = "#SERVICES#";
pub const CHARACTERISTICS_PLACEHOLDER: &str = "#CHARACTERISTICS#";

pub const BLE_TEMPLATE: &str = r##"// Code generated by tablegen; DO NOT EDIT.

package network

var BLE_Companies = map[uint16]string{
#COMPANIES#}

var BLE_Services = map[string]string{
#SERVICES#}

var BLE_Characteristics = map[string]string{
#CHARACTERISTICS#}
"##;

pub const MANUF_TEMPLATE: &str = r##"// Code generated by tablegen; DO NOT EDIT.

package network

import (
	"fmt"
	"math/big"
	"strings"
)

var manuf = map[string]string{
#MAP#}

func ManufLookup(mac string) string {
	macHex := strings.Replace(mac, ":", "", -1)
	macInt := new(big.Int)

	if _, ok := macInt.SetString(macHex, 16); !ok {
		return ""
	}

	for mask := uint(0); mask < 48; mask++ {
		shifted := new(big.Int).Rsh(macInt, mask).String()
		key := fmt.Sprintf("%d.%s", mask, shifted)
		if vendor, found := manuf[key]; found {
			return vendor
		}
	}

	return ""
}
"##;

pub const MANUF_CSV_TEMPLATE: &str = r##"// Code generated by tablegen; DO NOT EDIT.

package network

import "strings"

var manuf = map[string]string{
#MAP#}

func ManufLookup(mac string) string {
	macHex := strings.ToUpper(strings.Replace(mac, ":", "", -1))
	for _, size := range []int{9, 7, 6} {
		if len(macHex) < size {
			continue
		}
		if vendor, found := manuf[macHex[:size]]; found {
			return vendor
		}
	}
	return ""
}
"##;

pub const OUI_TEMPLATE: &str = r##"// Code generated by tablegen; DO NOT EDIT.

package network

import "strings"

var oui = map[string]string{
#MAP#}

func OuiLookup(mac string) string {
	prefix := strings.ToLower(strings.Replace(mac, ":", "", -1))
	if len(prefix) < 6 {
		return ""
	}
	return oui[prefix[:6]]
}
"##;
