/// The fixed voucher layout. Placeholders are `{{field_name}}`, one per
/// template field; substitution is literal, with no logic in the template.
///
/// Styling is deliberately plain (tables, solid colors) so the HTML-to-PDF
/// conversion stays within what the rendering engine supports.
pub(crate) const VOUCHER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Hotel Booking Confirmation Voucher</title>
    <style>
        @page {
            size: A4;
            margin: 20mm;
        }

        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            color: #333;
        }

        .voucher-container {
            border: 2px solid #dc2626;
            padding: 20px;
            background: white;
        }

        .header {
            text-align: center;
            margin-bottom: 20px;
        }

        .logo {
            background: #dc2626;
            color: white;
            padding: 15px;
            font-size: 24px;
            font-weight: bold;
            margin-bottom: 10px;
        }

        .title {
            color: #666;
            font-size: 18px;
            font-weight: bold;
            margin: 15px 0;
        }

        .emergency-contact {
            background: #dc2626;
            color: white;
            padding: 15px;
            margin: 20px 0;
        }

        .emergency-title {
            font-weight: bold;
            font-size: 14px;
            text-align: center;
            margin-bottom: 8px;
        }

        .emergency-text {
            font-size: 12px;
            text-align: center;
            margin-bottom: 10px;
        }

        .contact-info {
            background: #fbbf24;
            color: #000;
            padding: 8px 15px;
            font-weight: bold;
            font-size: 12px;
            text-align: center;
        }

        .voucher-details {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
        }

        .voucher-details td {
            padding: 8px 12px;
            border: 1px solid #ddd;
            font-size: 12px;
        }

        .label-cell {
            background: #bfdbfe;
            font-weight: bold;
            width: 200px;
            color: #1e40af;
        }

        .value-cell {
            background: #f8fafc;
        }

        .map-link {
            color: #2563eb;
            text-decoration: underline;
        }

        .cancellation-highlight {
            color: #dc2626;
            font-weight: bold;
        }

        .footer-note {
            margin-top: 30px;
            padding: 15px;
            background: #fef2f2;
            border: 1px solid #fecaca;
            color: #dc2626;
            font-size: 12px;
            text-align: center;
            font-style: italic;
        }
    </style>
</head>
<body>
    <div class="voucher-container">
        <div class="header">
            <div class="logo">LGT HOTEL STAYS</div>
            <div class="title">PREPAID HOTEL CONFIRMATION VOUCHER</div>
        </div>

        <div class="emergency-contact">
            <div class="emergency-title">EMERGENCY CONTACT DETAILS (24/7 Support)</div>
            <div class="emergency-text">In case of any issues during check-in/check-out during your stay at the hotel, please get in touch with us on our India emergency contact numbers mentioned below.</div>
            <div class="contact-info">Mr. Sandeep +91 7326091303 &middot; Email: ops@lgthotelstays.com</div>
        </div>

        <table class="voucher-details">
            <tr>
                <td class="label-cell">DATE VOUCHER ISSUED</td>
                <td class="value-cell">{{date_voucher_issued}}</td>
            </tr>
            <tr>
                <td class="label-cell">CONFIRMATION NUMBER (S)</td>
                <td class="value-cell">{{confirmation_number}}</td>
            </tr>
            <tr>
                <td class="label-cell">HOTEL NAME</td>
                <td class="value-cell">{{hotel_name}}</td>
            </tr>
            <tr>
                <td class="label-cell">ADDRESS</td>
                <td class="value-cell">{{address}}</td>
            </tr>
            <tr>
                <td class="label-cell">MAP LOCATION</td>
                <td class="value-cell"><a href="{{map_location}}" class="map-link">{{map_location}}</a></td>
            </tr>
            <tr>
                <td class="label-cell">HOTEL CONTACT NO.</td>
                <td class="value-cell">{{hotel_contact_no}}</td>
            </tr>
            <tr>
                <td class="label-cell">LEAD PASSENGER NAME (S)</td>
                <td class="value-cell">{{lead_passenger_name}}</td>
            </tr>
            <tr>
                <td class="label-cell">ROOM TYPE</td>
                <td class="value-cell">{{room_type}}</td>
            </tr>
            <tr>
                <td class="label-cell">INCLUSIONS</td>
                <td class="value-cell">{{inclusions}}</td>
            </tr>
            <tr>
                <td class="label-cell">NO OF ROOMS</td>
                <td class="value-cell">{{no_of_rooms}}</td>
            </tr>
            <tr>
                <td class="label-cell">NO OF ADULTS</td>
                <td class="value-cell">{{no_of_adults}}</td>
            </tr>
            <tr>
                <td class="label-cell">NO OF CHILDREN</td>
                <td class="value-cell">{{no_of_children}}</td>
            </tr>
            <tr>
                <td class="label-cell">CHECK-IN DATE</td>
                <td class="value-cell">{{check_in_date}}</td>
            </tr>
            <tr>
                <td class="label-cell">CHECK-OUT DATE</td>
                <td class="value-cell">{{check_out_date}}</td>
            </tr>
            <tr>
                <td class="label-cell">DURATION</td>
                <td class="value-cell">{{duration}}</td>
            </tr>
            <tr>
                <td class="label-cell">CANCELLATION POLICY</td>
                <td class="value-cell cancellation-highlight">{{cancellation_policy}}</td>
            </tr>
            <tr>
                <td class="label-cell">BOOKED AND PAYABLE BY</td>
                <td class="value-cell">{{booked_and_payable_by}}</td>
            </tr>
        </table>

        <div class="footer-note">
            This voucher is valid for the above specified services only. Any other extra service shall be paid by the client at the hotel.
        </div>
    </div>
</body>
</html>
"#;
